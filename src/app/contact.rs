use leptos::{either::Either, prelude::*};

use super::avatar::ProfilePicture;
use super::section::Reveal;
use crate::content::{self, ContactLink};
use crate::motion;

#[component]
pub fn ContactBody() -> impl IntoView {
    view! {
        <div class="max-w-3xl w-full">
            <h2 class="text-3xl font-bold mb-4">"Contact Me"</h2>
            <p class="text-lg mb-6">
                "Feel free to reach out for collaborations or just a friendly chat!"
            </p>
            <Reveal motion=motion::ITEM class="flex justify-center items-center mb-6">
                <ProfilePicture />
            </Reveal>
            <div class="space-y-4">
                {content::contact_links()
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        view! {
                            <Reveal motion=motion::ITEM index={i + 1}>
                                <p class="text-lg">
                                    <Contact link />
                                </p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Contact(link: &'static ContactLink) -> impl IntoView {
    let class = "text-blue-400 hover:underline";
    if link.external {
        Either::Left(view! {
            <a href=link.href target="_blank" rel="noopener noreferrer" class=class>
                {link.label}
            </a>
        })
    } else {
        Either::Right(view! {
            <a href=link.href class=class>
                {link.label}
            </a>
        })
    }
}
