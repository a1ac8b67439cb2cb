use crate::config::BREAKPOINT_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(width_px: f64) -> Self {
        if width_px >= f64::from(BREAKPOINT_PX) {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }

    pub fn from_is_wide(is_wide: bool) -> Self {
        if is_wide {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Narrow => "narrow",
            Viewport::Wide => "wide",
        }
    }
}

/// Visibility of the collapsed navigation menu shown on narrow viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub is_open: bool,
}

impl NavMenuState {
    /// Hamburger control.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// A navigation link was activated. The menu closes on narrow viewports; on wide
    /// ones it is not displayed, so it is left alone.
    pub fn link_activated(&mut self, viewport: Viewport) {
        if viewport == Viewport::Narrow {
            self.is_open = false;
        }
    }

    pub fn is_visible(&self, viewport: Viewport) -> bool {
        viewport == Viewport::Narrow && self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::nav_sections;

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(767.9), Viewport::Narrow);
        assert_eq!(Viewport::from_width(768.0), Viewport::Wide);
        assert_eq!(Viewport::from_width(1440.0), Viewport::Wide);
        assert_eq!(Viewport::from_is_wide(false), Viewport::Narrow);
    }

    #[test]
    fn test_hamburger_toggles() {
        let mut menu = NavMenuState::default();
        assert!(!menu.is_open);
        menu.toggle();
        assert!(menu.is_open);
        menu.toggle();
        assert!(!menu.is_open);
    }

    #[test]
    fn test_any_link_closes_menu_on_narrow() {
        for _ in nav_sections() {
            let mut menu = NavMenuState { is_open: true };
            menu.link_activated(Viewport::Narrow);
            assert!(!menu.is_open);
        }
    }

    #[test]
    fn test_menu_never_visible_on_wide() {
        let mut menu = NavMenuState { is_open: true };
        assert!(!menu.is_visible(Viewport::Wide));
        menu.link_activated(Viewport::Wide);
        assert!(!menu.is_visible(Viewport::Wide));
        assert!(menu.is_visible(Viewport::Narrow));
    }

    #[test]
    fn test_narrow_menu_scenario() {
        let mut menu = NavMenuState::default();
        menu.toggle();
        assert!(menu.is_visible(Viewport::Narrow));

        let links: Vec<&str> = nav_sections().map(|s| s.id).collect();
        assert_eq!(
            links,
            vec!["about", "projects", "experience", "achievements", "contact"]
        );

        menu.link_activated(Viewport::Narrow);
        assert!(!menu.is_visible(Viewport::Narrow));
    }
}
