// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded history of per-move pointer deltas.

use crate::config::VELOCITY_WINDOW;

/// Fixed-capacity ring buffer of horizontal pointer deltas.
///
/// Pushing into a full buffer overwrites the oldest sample, so the history
/// always holds the most recent [`VELOCITY_WINDOW`] moves of a drag.
///
/// ```
/// use glide_scroll::VelocitySamples;
///
/// let mut samples = VelocitySamples::new();
/// for dx in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
///     samples.push(dx);
/// }
/// assert_eq!(samples.len(), 5);
/// assert_eq!(samples.mean(), Some(4.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySamples {
    buf: [f64; VELOCITY_WINDOW],
    /// Index of the oldest sample.
    head: usize,
    len: usize,
}

impl VelocitySamples {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0.0; VELOCITY_WINDOW],
            head: 0,
            len: 0,
        }
    }

    /// Appends a delta, dropping the oldest one when full.
    pub fn push(&mut self, dx: f64) {
        if self.len < VELOCITY_WINDOW {
            self.buf[(self.head + self.len) % VELOCITY_WINDOW] = dx;
            self.len += 1;
        } else {
            self.buf[self.head] = dx;
            self.head = (self.head + 1) % VELOCITY_WINDOW;
        }
    }

    /// Removes every sample.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.buf[(self.head + i) % VELOCITY_WINDOW])
    }

    /// Arithmetic mean of the retained samples, or `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        // len is bounded by VELOCITY_WINDOW, so the conversion is exact.
        let n = self.len as f64;
        Some(self.iter().sum::<f64>() / n)
    }
}

impl Default for VelocitySamples {
    fn default() -> Self {
        Self::new()
    }
}
