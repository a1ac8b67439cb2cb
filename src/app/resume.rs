use leptos::prelude::*;

use super::rich_text::Rich;
use super::section::Reveal;
use crate::content::{self, CertificationEntry, ExperienceEntry};
use crate::motion;

#[component]
pub fn ExperienceBody() -> impl IntoView {
    view! {
        <div class="max-w-5xl w-full text-left">
            <h2 class="text-4xl font-bold mb-4">"Experience"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {content::experience()
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <Reveal motion=motion::ITEM index=i>
                                <Job entry />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Job(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h3 class="text-2xl font-semibold">
                {entry.company} " "
                <span class="text-gray-400 text-lg font-normal">"(" {entry.period} ")"</span>
            </h3>
            <ul class="list-disc ml-6 mt-2">
                {entry.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn AchievementsBody() -> impl IntoView {
    view! {
        <div class="max-w-3xl">
            <h2 class="text-3xl font-bold mb-4">"Achievements & Certifications"</h2>
            <ul class="text-lg inline-block text-left space-y-2">
                {content::certifications()
                    .iter()
                    .enumerate()
                    .map(|(i, cert)| {
                        view! {
                            <li>
                                <Reveal motion=motion::ITEM index=i>
                                    <Certification cert />
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Certification(cert: &'static CertificationEntry) -> impl IntoView {
    view! {
        {cert.icon}
        " "
        <Rich text=cert.text />
        {cert
            .link
            .map(|href| {
                view! {
                    " ["
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 underline"
                    >
                        "View Certificate"
                    </a>
                    "]"
                }
            })}
    }
}
