use leptos::prelude::*;

use super::anchor::{use_active_section, ScrollLink};
use super::PageEnv;
use crate::content::{self, SectionDescriptor};
use crate::nav::{NavMenuState, Viewport};

#[component]
pub fn NavigationBar() -> impl IntoView {
    let env = expect_context::<PageEnv>();
    let menu = RwSignal::new(NavMenuState::default());
    let viewport = Signal::derive(move || Viewport::from_is_wide(env.is_wide.get()));
    let active = use_active_section();

    let on_select = Callback::new(move |id: &'static str| {
        let viewport = viewport.get_untracked();
        log::debug!("nav link #{id} activated on {} viewport", viewport.as_str());
        menu.update(|m| m.link_activated(viewport));
    });

    let menu_open = move || menu.with(|m| m.is_open);

    view! {
        <nav
            class="fixed top-0 left-0 w-full bg-gray-900/95 text-white p-4 shadow-lg z-50"
            aria-label="Main navigation"
        >
            <div class="container mx-auto flex justify-between items-center">
                <ScrollLink target="hero" class="text-2xl font-bold" on_select>
                    {content::SITE_TITLE}
                </ScrollLink>
                <div class="hidden md:flex space-x-6">
                    <NavLinks active on_select />
                </div>
                <button
                    class="md:hidden text-2xl px-2 focus:outline-none focus:ring-2 focus:ring-blue-500 rounded"
                    aria-label="Toggle navigation menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| menu.update(NavMenuState::toggle)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu.with(|m| m.is_visible(viewport.get()))>
                <div id="mobile-menu" class="md:hidden flex flex-col space-y-4 pt-4 pb-2 px-2">
                    <NavLinks active on_select />
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks(
    active: Memo<Option<&'static str>>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    content::nav_sections()
        .map(|section| view! { <NavLink section active on_select /> })
        .collect_view()
}

#[component]
fn NavLink(
    section: &'static SectionDescriptor,
    active: Memo<Option<&'static str>>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let id = section.id;
    view! {
        <span class=move || {
            if active.get() == Some(id) { "text-blue-400" } else { "hover:text-gray-400" }
        }>
            <ScrollLink target=id on_select>
                {section.label}
            </ScrollLink>
        </span>
    }
}
