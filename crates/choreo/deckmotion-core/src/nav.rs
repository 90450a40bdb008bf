//! Navigation state: the sole driver of which slide is active.

use serde::{Deserialize, Serialize};

/// `current` is the single source of truth for the active slide; `direction`
/// is the sign of the last index delta, surfaced for the (external) page
/// transition layer and consumed by nothing in the core.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavState {
    current: usize,
    direction: i8,
    total: usize,
}

impl NavState {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            direction: 0,
            total,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to `index` (clamped into range). Returns true if the current
    /// slide changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.total == 0 {
            return false;
        }
        let index = index.min(self.total - 1);
        if index == self.current {
            return false;
        }
        self.direction = if index > self.current { 1 } else { -1 };
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.total == 0 || self.current + 1 >= self.total {
            return false;
        }
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.go_to(self.current - 1)
    }

    /// Adjust the slide count, keeping `current` in range.
    pub(crate) fn set_total(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            self.current = 0;
            self.direction = 0;
        } else if self.current >= total {
            self.current = total - 1;
        }
    }

    /// Shift `current` down after a removal below it.
    pub(crate) fn shift_down(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}
