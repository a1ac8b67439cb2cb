/// Entrance animation for an element: fades in and rises from `offset_y_px` below its
/// resting position once revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    duration_ms: u32,
    delay_ms: u32,
    offset_y_px: i32,
}

/// Delay added per child index inside a section.
pub const STAGGER_STEP_MS: u32 = 150;

pub const HERO_HEADLINE: Motion = Motion::fade().with_duration(1500);
pub const HERO_TAGLINE: Motion = Motion::fade().with_duration(2000);
pub const HERO_ACTION: Motion = Motion::rise(20).with_duration(1000).with_delay(800);
pub const SECTION: Motion = Motion::rise(20).with_duration(1500);
pub const ITEM: Motion = Motion::rise(12).with_duration(700);

impl Motion {
    pub const fn fade() -> Self {
        Self {
            duration_ms: 1000,
            delay_ms: 0,
            offset_y_px: 0,
        }
    }

    pub const fn rise(offset_y_px: i32) -> Self {
        Self {
            duration_ms: 1000,
            delay_ms: 0,
            offset_y_px,
        }
    }

    pub const fn with_duration(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Pushes the start back by one stagger step per `index`.
    pub const fn staggered(self, index: usize) -> Self {
        Self {
            delay_ms: self.delay_ms + STAGGER_STEP_MS * index as u32,
            ..self
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Inline style for the element. Reduced motion shows content at rest with no
    /// transition at all.
    pub fn style(&self, revealed: bool, reduced_motion: bool) -> String {
        if reduced_motion {
            return "opacity: 1; transform: none;".to_string();
        }
        let (opacity, offset) = if revealed {
            (1, 0)
        } else {
            (0, self.offset_y_px)
        };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

/// Latch for the animate-once policy: flips to revealed on first visibility and
/// stays there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one visibility observation. Returns true only on the transition that
    /// reveals.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
