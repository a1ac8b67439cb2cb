use leptos::{either::EitherOf3, prelude::*};

use crate::content::{RichText, Span};

/// Renders styled spans as escaped text nodes.
#[component]
pub fn Rich(text: RichText) -> impl IntoView {
    text.iter()
        .map(|span| match *span {
            Span::Text(s) => EitherOf3::A(s),
            Span::Strong(s) => EitherOf3::B(view! { <strong>{s}</strong> }),
            Span::Accent(tone, s) => EitherOf3::C(view! { <span class=tone.class()>{s}</span> }),
        })
        .collect_view()
}
