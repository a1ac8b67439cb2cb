use leptos::prelude::*;

use super::rich_text::Rich;
use super::section::Reveal;
use crate::content::{self, ProjectEntry};
use crate::disclosure::Disclosure;
use crate::motion;

#[component]
pub fn ProjectsBody() -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::new(content::projects().iter().map(|p| p.id)));
    view! {
        <div class="max-w-3xl w-full space-y-10">
            <h2 class="text-4xl font-bold text-blue-400">"Projects"</h2>
            {content::projects()
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    view! {
                        <Reveal motion=motion::ITEM index=i>
                            <ProjectCard project disclosure />
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry, disclosure: RwSignal<Disclosure>) -> impl IntoView {
    let id = project.id;
    let expanded = Memo::new(move |_| disclosure.with(|d| d.is_expanded(id)));
    let set_expanded = move |value: bool| {
        log::debug!("project {id} expanded: {value}");
        disclosure.update(|d| {
            if value {
                d.show_more(id)
            } else {
                d.show_less(id)
            }
        });
    };

    view! {
        <article id=format!("project-{id}") class="bg-gray-800 p-6 rounded-lg shadow-lg text-left">
            <h3 class="text-2xl font-bold mb-2">{project.title}</h3>
            <p>"🚀 " <strong>"Project Overview:"</strong></p>
            <p>
                <Rich text=project.summary />
            </p>
            <Show
                when=move || expanded.get()
                fallback=move || {
                    view! {
                        <button
                            class="mt-2 text-blue-500 hover:underline"
                            aria-expanded="false"
                            on:click=move |_| set_expanded(true)
                        >
                            "Click me for more information"
                        </button>
                    }
                }
            >
                <div class="mt-2">
                    <p>
                        <Rich text=project.detail.intro />
                    </p>
                    <ul class="list-disc ml-6">
                        {project
                            .detail
                            .bullets
                            .iter()
                            .map(|bullet| view! { <li>{*bullet}</li> })
                            .collect_view()}
                    </ul>
                    <button
                        class="mt-2 text-red-500 hover:underline"
                        aria-expanded="true"
                        on:click=move |_| set_expanded(false)
                    >
                        "Show less"
                    </button>
                </div>
            </Show>
        </article>
    }
}
