mod anchor;
mod avatar;
mod beacon;
mod contact;
mod header;
mod homepage;
mod projects;
mod resume;
mod rich_text;
mod section;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_media_query;

use crate::{config, content};
use beacon::UsageBeacon;
use header::NavigationBar;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/profile.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white">
                <App />
            </body>
        </html>
    }
}

/// Viewport facts shared by every section.
#[derive(Debug, Clone, Copy)]
pub struct PageEnv {
    pub is_wide: Signal<bool>,
    pub reduced_motion: Signal<bool>,
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_context(PageEnv {
        is_wide: use_media_query(config::wide_media_query()),
        reduced_motion: use_media_query(config::REDUCED_MOTION_QUERY.to_string()),
    });

    view! {
        <Title formatter=|title| format!("{} - {title}", content::OWNER) />
        <Meta name="description" content=content::hero().tagline />

        <Router>
            <NavigationBar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
        <UsageBeacon />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-sm text-gray-500 bg-gray-900">
            {format!("© {}", content::OWNER)}
            {config::build_date().map(|date| format!(" · updated {date}"))}
        </footer>
    }
}
