use serde::Serialize;

use crate::nav::Viewport;

/// Payload of the page-view beacon.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageView {
    pub path: String,
    pub viewport: &'static str,
    pub build: &'static str,
}

impl PageView {
    pub fn new(path: impl Into<String>, viewport: Viewport, build: &'static str) -> Self {
        Self {
            path: path.into(),
            viewport: viewport.as_str(),
            build,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_json() {
        let view = PageView::new("/", Viewport::Narrow, "2026-10-18T09:30:00+00:00");
        let json = view.to_json().expect("page view should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["path"], "/");
        assert_eq!(value["viewport"], "narrow");
        assert_eq!(value["build"], "2026-10-18T09:30:00+00:00");
    }
}
