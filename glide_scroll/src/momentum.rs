// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-release momentum with geometric velocity decay.

use crate::config::MomentumConfig;
use crate::samples::VelocitySamples;
use crate::surface::ScrollSurface;

/// Outcome of one animation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Motion continues; request another frame.
    Continue,
    /// Motion has settled; restore styling and go idle.
    Settled,
}

/// Momentum carried over from a released drag.
///
/// Velocity is in surface units per frame; positive values scroll toward the
/// end of the content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Momentum {
    velocity: f64,
}

impl Momentum {
    /// Derives release momentum from a drag's velocity history.
    ///
    /// Fewer than two samples carry no usable direction and yield `None`.
    /// Otherwise the mean pointer delta is negated (content moves against
    /// the pointer), scaled, and capped.
    #[must_use]
    pub fn from_samples(samples: &VelocitySamples, config: &MomentumConfig) -> Option<Self> {
        if samples.len() < 2 {
            return None;
        }
        let mean = samples.mean()?;
        let velocity = config.cap_velocity(-mean * config.release_velocity_scale);
        Some(Self { velocity })
    }

    /// Creates momentum with an explicit initial velocity.
    #[must_use]
    pub fn with_velocity(velocity: f64) -> Self {
        Self { velocity }
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advances one frame: applies velocity to the surface, then friction.
    ///
    /// Settles without writing when the velocity is already below the
    /// minimum, and settles after writing when the surface touches either
    /// end. Boundary contact stops motion rather than bouncing.
    pub fn step<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &MomentumConfig,
    ) -> Step {
        if self.velocity.abs() < config.min_velocity {
            return Step::Settled;
        }
        surface.set_scroll_offset(surface.scroll_offset() + self.velocity);
        self.velocity *= config.friction;

        let offset = surface.scroll_offset();
        if offset <= 0.0
            || offset + surface.client_extent() >= surface.scroll_extent() - config.boundary_slack
        {
            return Step::Settled;
        }
        Step::Continue
    }

    /// Upper bound on the frames a momentum phase starting at `velocity`
    /// can last, counting the final settling frame.
    ///
    /// Returns `u32::MAX` when the configuration never decays or never
    /// stops (a non-positive `min_velocity`).
    #[must_use]
    pub fn frames_to_settle(velocity: f64, config: &MomentumConfig) -> u32 {
        if !velocity.is_finite()
            || !(0.0..1.0).contains(&config.friction)
            || config.min_velocity.is_nan()
            || config.min_velocity <= 0.0
        {
            return u32::MAX;
        }
        let mut v = velocity.abs();
        let mut frames = 1_u32;
        while v >= config.min_velocity {
            v *= config.friction;
            frames = frames.saturating_add(1);
        }
        frames
    }
}
