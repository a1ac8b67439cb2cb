use chrono::{DateTime, Utc};

/// Width at which the page switches from the collapsed menu to inline links
/// (Tailwind's `md`).
pub const BREAKPOINT_PX: u32 = 768;

pub const SCROLL_DURATION_MS: u32 = 500;

/// Set by build.rs.
const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn wide_media_query() -> String {
    format!("(min-width: {BREAKPOINT_PX}px)")
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Endpoint for the page-view beacon, when the build was configured with one.
pub fn beacon_endpoint() -> Option<&'static str> {
    option_env!("PORTFOLIO_BEACON_URL").filter(|url| !url.trim().is_empty())
}

pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Month and year the site was built, e.g. "October 2026".
pub fn build_date() -> Option<String> {
    parse_build_date(BUILD_TIME)
}

fn parse_build_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_media_query() {
        assert_eq!(wide_media_query(), "(min-width: 768px)");
    }

    #[test]
    fn test_parse_build_date() {
        assert_eq!(
            parse_build_date("2026-10-18T09:30:00+00:00").as_deref(),
            Some("October 2026")
        );
        assert_eq!(parse_build_date("yesterday"), None);
    }

    #[test]
    fn test_build_time_is_stamped() {
        assert!(build_date().is_some());
    }
}
