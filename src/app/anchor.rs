use leptos::prelude::*;

use crate::config::SCROLL_DURATION_MS;
use crate::scroll::{nearest_anchor, ScrollTween};

/// Smooth-scrolls the window so the section `id` sits just under the navigation
/// bar. Jumps straight there when motion is reduced.
pub fn scroll_to_section(id: &str, reduced_motion: bool) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let win = window();
    let from = win.scroll_y().unwrap_or(0.0);
    let top = el.get_bounding_client_rect().top() + from;
    let duration = if reduced_motion { 0 } else { SCROLL_DURATION_MS };
    let tween = ScrollTween::to_anchor(from, top, duration);
    log::debug!("scrolling to #{id}: {from} -> {}", tween.target());

    match now_ms() {
        Some(started) if duration > 0 => step(tween, started),
        _ => win.scroll_to_with_x_and_y(0.0, tween.target()),
    }
}

fn now_ms() -> Option<f64> {
    window().performance().map(|p| p.now())
}

fn step(tween: ScrollTween, started: f64) {
    request_animation_frame(move || {
        let elapsed = now_ms().map_or(f64::INFINITY, |now| now - started);
        window().scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
        if !tween.is_done(elapsed) {
            step(tween, started);
        }
    });
}

/// Id of the section currently nearest the top of the viewport.
pub fn use_active_section() -> Memo<Option<&'static str>> {
    let (_, scroll_y) = leptos_use::use_window_scroll();
    Memo::new(move |_| {
        let y = scroll_y.get();
        nearest_anchor(&section_anchors(y), y)
    })
}

#[cfg(feature = "hydrate")]
fn section_anchors(scroll_y: f64) -> Vec<(&'static str, f64)> {
    crate::content::sections()
        .iter()
        .filter_map(|s| {
            let el = document().get_element_by_id(s.id)?;
            Some((s.id, el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn section_anchors(_scroll_y: f64) -> Vec<(&'static str, f64)> {
    Vec::new()
}

/// In-page link that smooth-scrolls to a section instead of jumping.
#[component]
pub fn ScrollLink(
    target: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_select: Option<Callback<&'static str>>,
    children: Children,
) -> impl IntoView {
    let env = expect_context::<super::PageEnv>();
    view! {
        <a
            href=format!("#{target}")
            class=format!("cursor-pointer {class}")
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(target, env.reduced_motion.get_untracked());
                if let Some(cb) = on_select {
                    cb.run(target);
                }
            }
        >
            {children()}
        </a>
    }
}
