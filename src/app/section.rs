use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::PageEnv;
use crate::content::{SectionDescriptor, SectionKind};
use crate::motion::{self, Motion, RevealLatch};

/// Whether the enclosing section has been revealed yet.
#[derive(Debug, Clone, Copy)]
struct SectionReveal {
    revealed: Signal<bool>,
    reduced_motion: Signal<bool>,
}

fn section_class(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Hero => {
            "h-screen flex flex-col justify-center items-center px-6 text-center bg-gray-800"
        }
        SectionKind::Experience => "flex items-center justify-center min-h-screen px-6 py-24",
        _ => "flex flex-col items-center justify-center min-h-screen px-6 py-24 text-center",
    }
}

fn section_motion(kind: SectionKind) -> Option<Motion> {
    match kind {
        // hero children carry their own timings
        SectionKind::Hero => None,
        _ => Some(motion::SECTION),
    }
}

/// A page section anchored at `descriptor.id`. Its entrance animation plays the
/// first time it becomes visible and never again.
#[component]
pub fn Section(descriptor: &'static SectionDescriptor, children: Children) -> impl IntoView {
    let env = expect_context::<PageEnv>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section_ref);
    let latch = RwSignal::new(RevealLatch::default());
    let id = descriptor.id;

    Effect::new(move |_| {
        let is_visible = visible.get();
        latch.maybe_update(|l| {
            let changed = l.observe(is_visible);
            if changed {
                log::debug!("revealing section #{id}");
            }
            changed
        });
    });

    let revealed = Signal::derive(move || latch.with(RevealLatch::is_revealed));
    provide_context(SectionReveal {
        revealed,
        reduced_motion: env.reduced_motion,
    });

    let motion = section_motion(descriptor.kind);
    view! {
        <section id=id node_ref=section_ref class=section_class(descriptor.kind)>
            <div
                class="w-full flex flex-col items-center"
                style=move || {
                    motion
                        .map(|m| m.style(revealed.get(), env.reduced_motion.get()))
                        .unwrap_or_default()
                }
            >
                {children()}
            </div>
        </section>
    }
}

/// Element that animates in with its section, delayed by `index` stagger steps.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional)] index: usize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let SectionReveal {
        revealed,
        reduced_motion,
    } = expect_context::<SectionReveal>();
    let motion = motion.staggered(index);
    view! {
        <div class=class style=move || motion.style(revealed.get(), reduced_motion.get())>
            {children()}
        </div>
    }
}
