use leptos::prelude::*;

use super::PageEnv;
use crate::config;
use crate::nav::Viewport;
use crate::telemetry::PageView;

/// Sends one page-view beacon after hydration when an endpoint is configured.
/// Nothing on the page depends on the outcome.
#[component]
pub fn UsageBeacon() -> impl IntoView {
    let env = expect_context::<PageEnv>();
    Effect::new(move |_| {
        let Some(endpoint) = config::beacon_endpoint() else {
            return;
        };
        let viewport = Viewport::from_is_wide(env.is_wide.get_untracked());
        send_page_view(endpoint, viewport);
    });
}

fn send_page_view(endpoint: &str, viewport: Viewport) {
    let path = window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());
    let payload = match PageView::new(path, viewport, config::build_time()).to_json() {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("couldn't encode page view: {e}");
            return;
        }
    };
    match window()
        .navigator()
        .send_beacon_with_opt_str(endpoint, Some(&payload))
    {
        Ok(true) => log::debug!("page view queued for {endpoint}"),
        Ok(false) => log::debug!("browser refused page view beacon"),
        Err(e) => log::debug!("page view beacon failed: {e:?}"),
    }
}
