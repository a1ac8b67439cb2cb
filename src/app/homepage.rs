use leptos::prelude::*;
use leptos_meta::Title;

use super::anchor::ScrollLink;
use super::contact::ContactBody;
use super::projects::ProjectsBody;
use super::resume::{AchievementsBody, ExperienceBody};
use super::rich_text::Rich;
use super::section::{Reveal, Section};
use crate::content::{self, SectionKind};
use crate::motion;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        {content::sections()
            .iter()
            .map(|descriptor| {
                view! { <Section descriptor>{section_body(descriptor.kind)}</Section> }
            })
            .collect_view()}
    }
}

fn section_body(kind: SectionKind) -> AnyView {
    match kind {
        SectionKind::Hero => view! { <HeroBody /> }.into_any(),
        SectionKind::About => view! { <AboutBody /> }.into_any(),
        SectionKind::Projects => view! { <ProjectsBody /> }.into_any(),
        SectionKind::Experience => view! { <ExperienceBody /> }.into_any(),
        SectionKind::Achievements => view! { <AchievementsBody /> }.into_any(),
        SectionKind::Contact => view! { <ContactBody /> }.into_any(),
    }
}

#[component]
fn HeroBody() -> impl IntoView {
    let hero = content::hero();
    view! {
        <Reveal motion=motion::HERO_HEADLINE>
            <h1 class="text-4xl md:text-5xl font-bold">{hero.headline}</h1>
        </Reveal>
        <Reveal motion=motion::HERO_TAGLINE>
            <p class="text-xl mt-4">{hero.tagline}</p>
        </Reveal>
        <Reveal motion=motion::HERO_ACTION class="mt-6">
            <ScrollLink
                target=hero.call_to_action_target
                class="inline-block px-6 py-3 bg-blue-500 hover:bg-blue-600 text-white rounded-lg transition"
            >
                {hero.call_to_action}
            </ScrollLink>
        </Reveal>
    }
}

#[component]
fn AboutBody() -> impl IntoView {
    let about = content::about();
    let closing_index = about.paragraphs.len();
    view! {
        <div class="max-w-2xl">
            <h2 class="text-4xl font-bold text-blue-400">"About Me"</h2>
            {about
                .paragraphs
                .iter()
                .enumerate()
                .map(|(i, paragraph)| {
                    view! {
                        <Reveal motion=motion::ITEM index=i>
                            <p class="mt-4 text-lg">
                                <Rich text=*paragraph />
                            </p>
                        </Reveal>
                    }
                })
                .collect_view()}
            <Reveal motion=motion::ITEM index=closing_index>
                <p class="mt-4 text-lg font-semibold text-purple-400">{about.closing}</p>
            </Reveal>
        </div>
    }
}
