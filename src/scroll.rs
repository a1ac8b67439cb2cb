/// Height of the pinned navigation bar; section anchors land just below it.
pub const NAV_OFFSET_PX: f64 = 72.0;

/// Fixed-duration smooth scroll from one vertical position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
        }
    }

    /// Tween towards the resting position for an anchor whose top sits at
    /// `anchor_top` in document coordinates.
    pub fn to_anchor(from: f64, anchor_top: f64, duration_ms: u32) -> Self {
        Self::new(from, anchor_target(anchor_top), duration_ms)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        let t = (elapsed_ms / self.duration_ms).max(0.0);
        self.from + (self.to - self.from) * ease_in_out_quart(t)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

/// Scroll position that puts an anchor right under the navigation bar.
pub fn anchor_target(anchor_top: f64) -> f64 {
    (anchor_top - NAV_OFFSET_PX).max(0.0)
}

fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// The anchor whose resting position is nearest to `scroll_y`. Ties go to the
/// later anchor so a section that fills the viewport wins over the one above it.
pub fn nearest_anchor<'a>(anchors: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    anchors
        .iter()
        .map(|(id, top)| (*id, (anchor_target(*top) - scroll_y).abs()))
        .fold(None, |best: Option<(&'a str, f64)>, (id, dist)| match best {
            Some((_, best_dist)) if best_dist < dist => best,
            _ => Some((id, dist)),
        })
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::nav_sections;

    fn page_anchors() -> Vec<(&'static str, f64)> {
        // sections laid out one viewport (900px) apart below the hero
        std::iter::once(("hero", 0.0))
            .chain(
                nav_sections()
                    .enumerate()
                    .map(|(i, s)| (s.id, 900.0 * (i + 1) as f64)),
            )
            .collect()
    }

    #[test]
    fn test_tween_endpoints() {
        let tween = ScrollTween::new(100.0, 1100.0, 500);
        assert_eq!(tween.position_at(0.0), 100.0);
        assert_eq!(tween.position_at(500.0), 1100.0);
        assert_eq!(tween.position_at(10_000.0), 1100.0);
        assert!(!tween.is_done(499.0));
        assert!(tween.is_done(500.0));
    }

    #[test]
    fn test_tween_is_monotonic_and_symmetric() {
        let tween = ScrollTween::new(0.0, 1000.0, 500);
        let mut last = tween.position_at(0.0);
        for ms in (10..=500).step_by(10) {
            let y = tween.position_at(f64::from(ms));
            assert!(y >= last);
            last = y;
        }
        assert!((tween.position_at(250.0) - 500.0).abs() < 1e-9);

        let up = ScrollTween::new(1000.0, 0.0, 500);
        assert!(up.position_at(100.0) > up.position_at(400.0));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = ScrollTween::new(0.0, 300.0, 0);
        assert!(tween.is_done(0.0));
        assert_eq!(tween.position_at(0.0), 300.0);
    }

    #[test]
    fn test_anchor_target_clears_nav_bar() {
        assert_eq!(anchor_target(1000.0), 1000.0 - NAV_OFFSET_PX);
        assert_eq!(anchor_target(10.0), 0.0);
    }

    #[test]
    fn test_nearest_anchor() {
        let anchors = page_anchors();
        assert_eq!(nearest_anchor(&anchors, 0.0), Some("hero"));
        assert_eq!(nearest_anchor(&anchors, 1700.0), Some("projects"));
        assert_eq!(nearest_anchor(&[], 100.0), None);
    }

    #[test]
    fn test_every_shortcut_lands_on_its_section() {
        let anchors = page_anchors();
        for start in [0.0, 2500.0, 10_000.0] {
            for (id, top) in anchors.iter().skip(1) {
                let tween = ScrollTween::to_anchor(start, *top, 500);
                let end = tween.position_at(500.0);
                assert_eq!(nearest_anchor(&anchors, end), Some(*id));
            }
        }
    }
}
