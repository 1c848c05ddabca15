// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel easing: exponential approach toward an accumulated target.

use crate::config::MomentumConfig;
use crate::momentum::Step;
use crate::surface::ScrollSurface;

/// Accumulated wheel target and the flag saying wheel easing owns the offset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelEasing {
    target: f64,
    active: bool,
}

impl WheelEasing {
    /// The offset the easing is heading to.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether wheel easing currently owns the scroll offset.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Adds `delta` to the target, clamped to `0.0..=max`.
    ///
    /// The first call after [`deactivate`](Self::deactivate) captures
    /// `current` as the starting target. Returns the new target, or `None`
    /// when clamping leaves it unchanged (the event should then pass through).
    pub fn accumulate(&mut self, current: f64, delta: f64, max: f64) -> Option<f64> {
        let max = max.max(0.0);
        if !self.active {
            self.target = current.clamp(0.0, max);
            self.active = true;
        }
        let next = (self.target + delta).clamp(0.0, max);
        if next == self.target {
            return None;
        }
        self.target = next;
        Some(next)
    }

    /// Pulls the target back into `0.0..=max` after the surface shrank.
    pub fn clamp_to(&mut self, max: f64) {
        self.target = self.target.clamp(0.0, max.max(0.0));
    }

    /// Marks wheel easing inactive; the next wheel event re-captures.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Moves the surface one frame closer to the target.
    ///
    /// Within `wheel_settle` of the target the surface snaps exactly onto it
    /// and the step reports [`Step::Settled`]. The target is re-clamped to
    /// the surface's current range first.
    pub fn step<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &MomentumConfig,
    ) -> Step {
        self.clamp_to(surface.max_scroll_offset());
        let current = surface.scroll_offset();
        let diff = self.target - current;
        if diff.abs() < config.wheel_settle {
            surface.set_scroll_offset(self.target);
            return Step::Settled;
        }
        surface.set_scroll_offset(current + diff * config.wheel_lerp);
        Step::Continue
    }
}
