use leptos::prelude::*;

use crate::content;

#[component]
pub fn ProfilePicture() -> impl IntoView {
    view! {
        <img
            src=content::profile_image()
            alt="Profile"
            class="w-40 h-40 md:w-48 md:h-48 rounded-full object-cover border-4 border-blue-400 shadow-lg"
        />
    }
}
