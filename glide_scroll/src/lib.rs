// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glide_scroll --heading-base-level=0

//! Glide Scroll: wheel easing and pointer-drag momentum for a horizontal strip.
//!
//! This crate provides a headless [`ScrollMomentumController`] that turns raw
//! wheel and pointer events into scroll-offset writes on a single horizontally
//! scrollable surface. It owns two motion sources and guarantees that exactly
//! one of them writes the offset at any time:
//!
//! - **Wheel easing**: wheel deltas accumulate into a clamped target and the
//!   offset approaches it by a fixed fraction every frame, snapping exactly
//!   onto it once close enough.
//! - **Drag momentum**: a primary press on the surface drags the content 1:1;
//!   on release the recent pointer velocity keeps the content coasting with
//!   geometric decay until it slows down or hits an end.
//!
//! Native scroll snapping is suspended while either source animates and is
//! restored when motion settles.
//!
//! The crate does not know about any UI toolkit. Hosts are expected to:
//!
//! - Implement [`ScrollSurface`] for their element (or use [`HeadlessSurface`]).
//! - Implement [`Scheduler`] over their frame and timer APIs (or drive
//!   [`ManualScheduler`] from a fixed-tick loop).
//! - Forward wheel, pointer, and click events to the `on_*` methods and honor
//!   the returned [`EventDisposition`].
//! - Hand fired frame and timer tokens back via
//!   [`ScrollMomentumController::on_frame`] and
//!   [`ScrollMomentumController::on_timer`].
//!
//! ## Minimal example
//!
//! ```rust
//! use glide_scroll::{
//!     HeadlessSurface, ManualScheduler, PointerInput, ScrollMode,
//!     ScrollMomentumController, ScrollSurface, WheelInput,
//! };
//!
//! let surface = HeadlessSurface::new(2000.0, 500.0);
//! let mut ctl = ScrollMomentumController::attach(surface, ManualScheduler::new());
//!
//! // A vertical wheel notch scrolls the strip sideways.
//! assert!(ctl.on_wheel(WheelInput::new(0.0, 100.0)).is_consumed());
//! ctl.run_until_still(100);
//! assert_eq!(ctl.surface().scroll_offset(), 100.0);
//!
//! // Flick the content to the left.
//! ctl.on_pointer_down(PointerInput::primary(1, 400.0));
//! for x in [360.0, 320.0, 280.0] {
//!     ctl.on_pointer_move(PointerInput::primary(1, x));
//! }
//! ctl.on_pointer_up(PointerInput::primary(1, 280.0));
//! assert_eq!(ctl.mode(), ScrollMode::Momentum);
//!
//! ctl.run_until_still(1_000);
//! assert_eq!(ctl.mode(), ScrollMode::Idle);
//! assert!(ctl.surface().scroll_offset() > 220.0);
//!
//! let (_surface, _scheduler) = ctl.detach();
//! ```
//!
//! ## Tuning
//!
//! [`MomentumConfig`] carries every constant (friction, interpolation factor,
//! thresholds, idle delay). The defaults reproduce the reference feel.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod drag;
mod input;
mod momentum;
mod samples;
mod schedule;
mod surface;
mod wheel;

pub use config::{MomentumConfig, VELOCITY_WINDOW};
pub use controller::{ScrollMode, ScrollMomentumController};
pub use drag::{DragRelease, DragSession};
pub use input::{
    EventDisposition, PointerButton, PointerId, PointerInput, PointerTarget, WheelInput,
};
pub use momentum::{Momentum, Step};
pub use samples::VelocitySamples;
pub use schedule::{FrameToken, ManualScheduler, Scheduler, TimerToken};
pub use surface::{HeadlessSurface, InputKinds, ScrollSurface};
pub use wheel::WheelEasing;
