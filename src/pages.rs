//! Page navigator — wrap-around page index with a post-scroll debounce.
//!
//! The navigator is told the joystick direction once per control cycle. After
//! any page change it ignores navigation input for a fixed number of cycles,
//! so one held deflection advances a single page and then pauses instead of
//! spinning through the whole ring.

use log::debug;

/// Owns the current display page and the debounce window.
pub struct PageNavigator {
    current: u8,
    total: u8,
    /// Cycles remaining in which navigation input is ignored.
    cooldown: u32,
    /// Cooldown reload value after a page change.
    debounce_cycles: u32,
}

impl PageNavigator {
    pub fn new(total_pages: u8, debounce_cycles: u32) -> Self {
        debug_assert!(total_pages > 0, "page ring cannot be empty");
        Self {
            current: 0,
            total: total_pages.max(1),
            cooldown: 0,
            debounce_cycles,
        }
    }

    /// Current page index, always in `[0, total_pages)`.
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Feed one cycle's navigation input. Returns the new page index when a
    /// move happened.
    ///
    /// Simultaneous up+down cancels out — ambiguous input must not pick a
    /// direction. During the cooldown window all input is ignored (the window
    /// still counts down).
    pub fn navigate(&mut self, up: bool, down: bool) -> Option<u8> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        if up == down {
            return None;
        }

        self.current = if up {
            // Decrement wraps 0 -> total - 1.
            self.current.checked_sub(1).unwrap_or(self.total - 1)
        } else {
            (self.current + 1) % self.total
        };

        self.cooldown = self.debounce_cycles;
        debug!("Page -> {}", self.current);
        Some(self.current)
    }
}
