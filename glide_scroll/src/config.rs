// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning constants for wheel easing and drag momentum.

/// Number of per-move deltas retained for release-velocity estimation.
pub const VELOCITY_WINDOW: usize = 5;

/// Tuning parameters for a [`ScrollMomentumController`](crate::ScrollMomentumController).
///
/// The [`Default`] values reproduce the reference feel and should only be
/// changed deliberately; all distances are in surface units (typically CSS
/// pixels) and all velocities are in surface units per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumConfig {
    /// Cumulative pointer travel beyond which a drag counts as "moved" and the
    /// following click is swallowed.
    pub drag_threshold: f64,
    /// Per-frame velocity multiplier during momentum decay.
    pub friction: f64,
    /// Momentum stops once the velocity magnitude drops below this value.
    pub min_velocity: f64,
    /// Fraction of the remaining distance covered on each wheel-easing frame.
    pub wheel_lerp: f64,
    /// Wheel easing snaps to its target once closer than this distance.
    pub wheel_settle: f64,
    /// Wheel events whose dominant delta is smaller than this are ignored.
    pub wheel_min_delta: f64,
    /// Multiplier applied to the mean drag delta to obtain release velocity.
    pub release_velocity_scale: f64,
    /// Upper bound on the magnitude of the release velocity.
    ///
    /// Unbounded by default.
    pub max_release_velocity: f64,
    /// Delay after the last wheel activity before native snapping is restored.
    pub idle_restore_ms: u32,
    /// Slack subtracted from the far edge when testing for boundary contact
    /// during momentum.
    pub boundary_slack: f64,
}

impl MomentumConfig {
    /// Returns `velocity` limited to `±max_release_velocity`.
    ///
    /// A NaN cap counts as unbounded.
    #[must_use]
    pub fn cap_velocity(&self, velocity: f64) -> f64 {
        let cap = self.max_release_velocity.abs();
        if cap.is_nan() {
            return velocity;
        }
        velocity.clamp(-cap, cap)
    }
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 3.0,
            friction: 0.92,
            min_velocity: 0.5,
            wheel_lerp: 0.18,
            wheel_settle: 0.5,
            wheel_min_delta: 1.0,
            release_velocity_scale: 1.5,
            max_release_velocity: f64::INFINITY,
            idle_restore_ms: 200,
            boundary_slack: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = MomentumConfig::default();
        assert_eq!(config.drag_threshold, 3.0);
        assert_eq!(config.friction, 0.92);
        assert_eq!(config.min_velocity, 0.5);
        assert_eq!(config.wheel_lerp, 0.18);
        assert_eq!(config.wheel_settle, 0.5);
        assert_eq!(config.release_velocity_scale, 1.5);
        assert_eq!(config.idle_restore_ms, 200);
        assert_eq!(VELOCITY_WINDOW, 5);
    }

    #[test]
    fn default_cap_is_transparent() {
        let config = MomentumConfig::default();
        assert_eq!(config.cap_velocity(1.0e9), 1.0e9);
        assert_eq!(config.cap_velocity(-42.0), -42.0);
    }

    #[test]
    fn cap_limits_both_directions() {
        let config = MomentumConfig {
            max_release_velocity: 50.0,
            ..MomentumConfig::default()
        };
        assert_eq!(config.cap_velocity(80.0), 50.0);
        assert_eq!(config.cap_velocity(-80.0), -50.0);
        assert_eq!(config.cap_velocity(12.5), 12.5);
    }

    #[test]
    fn nan_cap_is_unbounded() {
        let config = MomentumConfig {
            max_release_velocity: f64::NAN,
            ..MomentumConfig::default()
        };
        assert_eq!(config.cap_velocity(80.0), 80.0);
        assert_eq!(config.cap_velocity(-3.0), -3.0);
    }
}
