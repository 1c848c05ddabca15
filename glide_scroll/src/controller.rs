// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller arbitrating wheel easing and drag momentum.

use tracing::{debug, trace};

use crate::config::MomentumConfig;
use crate::drag::DragSession;
use crate::input::{EventDisposition, PointerButton, PointerInput, WheelInput};
use crate::momentum::{Momentum, Step};
use crate::schedule::{FrameToken, ManualScheduler, Scheduler, TimerToken};
use crate::surface::{InputKinds, ScrollSurface};
use crate::wheel::WheelEasing;

/// Which motion source currently owns the scroll offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollMode {
    /// Nothing is animating; native scrolling applies.
    Idle,
    /// Wheel easing owns the offset.
    Wheel,
    /// A pointer is held down and the offset tracks it.
    Dragging,
    /// A released drag is coasting to a stop.
    Momentum,
}

/// Wheel easing plus pointer-drag momentum for one horizontal surface.
///
/// Input events go in through the `on_*` methods; scheduled frames and
/// timers come back through [`on_frame`](Self::on_frame) and
/// [`on_timer`](Self::on_timer). At most one of the wheel and momentum
/// animations is scheduled at any time, and starting either one cancels
/// the other together with its pending timer.
///
/// Dropping a controller does not cancel anything; call
/// [`detach`](Self::detach) to unregister listeners and cancel pending
/// callbacks.
#[derive(Debug)]
pub struct ScrollMomentumController<S: ScrollSurface, C: Scheduler> {
    surface: S,
    scheduler: C,
    config: MomentumConfig,
    wheel: WheelEasing,
    wheel_frame: Option<FrameToken>,
    wheel_idle_timer: Option<TimerToken>,
    drag: DragSession,
    momentum: Option<Momentum>,
    momentum_frame: Option<FrameToken>,
    swallow_next_click: bool,
}

impl<S: ScrollSurface, C: Scheduler> ScrollMomentumController<S, C> {
    /// Attaches to `surface` with the default configuration.
    pub fn attach(surface: S, scheduler: C) -> Self {
        Self::attach_with_config(surface, scheduler, MomentumConfig::default())
    }

    /// Attaches to `surface`, registering the wheel and pointer listeners.
    pub fn attach_with_config(mut surface: S, scheduler: C, config: MomentumConfig) -> Self {
        surface.listen(InputKinds::ATTACHED);
        trace!("scroll controller attached");
        Self {
            surface,
            scheduler,
            config,
            wheel: WheelEasing::default(),
            wheel_frame: None,
            wheel_idle_timer: None,
            drag: DragSession::default(),
            momentum: None,
            momentum_frame: None,
            swallow_next_click: false,
        }
    }

    /// Detaches from the surface and hands back the surface and scheduler.
    ///
    /// Cancels every pending frame and timer, releases a held pointer,
    /// restores neutral styling, and removes all listeners.
    pub fn detach(mut self) -> (S, C) {
        self.stop_motion();
        if let Some(release) = self.drag.end() {
            self.surface.release_pointer(release.pointer_id);
        }
        self.surface.set_grabbing(false);
        self.surface.set_snap_suspended(false);

        let mut kinds = InputKinds::ATTACHED;
        if self.swallow_next_click {
            kinds |= InputKinds::CLICK;
        }
        self.surface.unlisten(kinds);
        trace!("scroll controller detached");
        (self.surface, self.scheduler)
    }

    /// Handles a wheel event.
    ///
    /// Returns [`EventDisposition::Consumed`] when the event moved the wheel
    /// target; the host must then prevent the native scroll.
    pub fn on_wheel(&mut self, input: WheelInput) -> EventDisposition {
        let delta = input.dominant_delta();
        if delta.abs() < self.config.wheel_min_delta {
            return EventDisposition::Ignored;
        }
        // The held pointer owns the offset until release.
        if self.drag.is_dragging() {
            return EventDisposition::Ignored;
        }

        let current = self.surface.scroll_offset();
        let max = self.surface.max_scroll_offset();
        let Some(target) = self.wheel.accumulate(current, delta, max) else {
            if self.wheel_frame.is_none() && self.wheel_idle_timer.is_none() {
                self.wheel.deactivate();
            }
            return EventDisposition::Ignored;
        };

        if self.momentum.is_some() {
            trace!("wheel supersedes momentum");
            self.stop_momentum();
        }
        trace!(wheel_target = target, "wheel retargeted");
        self.start_wheel_animation();
        self.schedule_snap_restore();
        EventDisposition::Consumed
    }

    /// Handles a pointer press.
    ///
    /// Only primary presses on non-interactive targets start a drag. The
    /// press itself is never consumed.
    pub fn on_pointer_down(&mut self, input: PointerInput) -> EventDisposition {
        if input.button != PointerButton::Primary || input.target.is_interactive() {
            return EventDisposition::Ignored;
        }

        self.stop_motion();
        if let Some(stale) = self.drag.end() {
            self.surface.release_pointer(stale.pointer_id);
        }

        self.drag
            .start(input.pointer_id, input.position, self.surface.scroll_offset());
        self.surface.capture_pointer(input.pointer_id);
        self.surface.set_snap_suspended(true);
        self.surface.set_grabbing(true);
        trace!(x = input.position.x, "drag started");
        EventDisposition::Ignored
    }

    /// Handles pointer movement; the surface tracks the pointer 1:1.
    pub fn on_pointer_move(&mut self, input: PointerInput) -> EventDisposition {
        if self.drag.pointer_id() != Some(input.pointer_id) {
            return EventDisposition::Ignored;
        }
        if let Some(offset) = self.drag.update(input.position, self.config.drag_threshold) {
            self.surface.set_scroll_offset(offset);
        }
        EventDisposition::Ignored
    }

    /// Handles a pointer release, converting recent movement into momentum.
    pub fn on_pointer_up(&mut self, input: PointerInput) -> EventDisposition {
        self.release(input);
        EventDisposition::Ignored
    }

    /// Handles a platform pointer cancellation exactly like a release.
    pub fn on_pointer_cancel(&mut self, input: PointerInput) -> EventDisposition {
        self.release(input);
        EventDisposition::Ignored
    }

    /// Handles a click in the capture phase.
    ///
    /// After a drag that moved past the threshold, the next click is
    /// consumed once so the press does not activate whatever lies under it.
    pub fn on_click(&mut self) -> EventDisposition {
        if !self.swallow_next_click {
            return EventDisposition::Ignored;
        }
        self.swallow_next_click = false;
        self.surface.unlisten(InputKinds::CLICK);
        trace!("click after drag swallowed");
        EventDisposition::Consumed
    }

    /// Runs the callback for a frame requested earlier.
    ///
    /// Returns `false` for tokens that are stale (cancelled or superseded).
    pub fn on_frame(&mut self, token: FrameToken) -> bool {
        if self.wheel_frame == Some(token) {
            self.wheel_frame = None;
            match self.wheel.step(&mut self.surface, &self.config) {
                Step::Continue => self.wheel_frame = Some(self.scheduler.request_frame()),
                Step::Settled => {
                    trace!(offset = self.wheel.target(), "wheel settled");
                    self.schedule_snap_restore();
                }
            }
            return true;
        }

        if self.momentum_frame == Some(token) {
            self.momentum_frame = None;
            let Some(momentum) = self.momentum.as_mut() else {
                return true;
            };
            match momentum.step(&mut self.surface, &self.config) {
                Step::Continue => self.momentum_frame = Some(self.scheduler.request_frame()),
                Step::Settled => {
                    trace!(offset = self.surface.scroll_offset(), "momentum settled");
                    self.momentum = None;
                    self.surface.set_snap_suspended(false);
                }
            }
            return true;
        }

        false
    }

    /// Runs the callback for a timer set earlier.
    ///
    /// Returns `false` for stale tokens.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.wheel_idle_timer != Some(token) {
            return false;
        }
        self.wheel_idle_timer = None;
        self.surface.set_snap_suspended(false);
        self.wheel.deactivate();
        trace!("wheel idle, snapping restored");
        true
    }

    /// The motion source currently owning the offset.
    #[must_use]
    pub fn mode(&self) -> ScrollMode {
        if self.drag.is_dragging() {
            ScrollMode::Dragging
        } else if self.momentum.is_some() {
            ScrollMode::Momentum
        } else if self.wheel.is_active() {
            ScrollMode::Wheel
        } else {
            ScrollMode::Idle
        }
    }

    /// The accumulated wheel target.
    #[must_use]
    pub fn wheel_target(&self) -> f64 {
        self.wheel.target()
    }

    /// Whether wheel easing is active.
    #[must_use]
    pub fn is_wheel_active(&self) -> bool {
        self.wheel.is_active()
    }

    /// Whether a drag session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the current or last drag moved past the threshold.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.drag.has_moved()
    }

    /// Whether the next click will be swallowed.
    #[must_use]
    pub fn swallows_next_click(&self) -> bool {
        self.swallow_next_click
    }

    /// Momentum velocity, while coasting.
    #[must_use]
    pub fn velocity(&self) -> Option<f64> {
        self.momentum.map(|m| m.velocity())
    }

    /// The drag session state.
    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// The attached surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for host-side geometry updates.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    fn release(&mut self, input: PointerInput) {
        if self.drag.pointer_id() != Some(input.pointer_id) {
            return;
        }
        let Some(release) = self.drag.end() else {
            return;
        };
        self.surface.release_pointer(release.pointer_id);
        self.surface.set_grabbing(false);

        if release.moved && !self.swallow_next_click {
            self.swallow_next_click = true;
            self.surface.listen(InputKinds::CLICK);
        }

        match Momentum::from_samples(&release.samples, &self.config) {
            Some(momentum) => {
                debug!(velocity = momentum.velocity(), "momentum started");
                self.momentum = Some(momentum);
                self.momentum_frame = Some(self.scheduler.request_frame());
            }
            None => {
                trace!(samples = release.samples.len(), "release without momentum");
                self.surface.set_snap_suspended(false);
            }
        }
    }

    fn start_wheel_animation(&mut self) {
        if self.wheel_frame.is_some() {
            return;
        }
        self.surface.set_snap_suspended(true);
        self.wheel_frame = Some(self.scheduler.request_frame());
    }

    fn schedule_snap_restore(&mut self) {
        if let Some(timer) = self.wheel_idle_timer.take() {
            self.scheduler.cancel_timer(timer);
        }
        self.wheel_idle_timer = Some(self.scheduler.set_timer(self.config.idle_restore_ms));
    }

    fn stop_momentum(&mut self) {
        if let Some(frame) = self.momentum_frame.take() {
            self.scheduler.cancel_frame(frame);
        }
        self.momentum = None;
    }

    fn stop_wheel(&mut self) {
        if let Some(frame) = self.wheel_frame.take() {
            self.scheduler.cancel_frame(frame);
        }
        if let Some(timer) = self.wheel_idle_timer.take() {
            self.scheduler.cancel_timer(timer);
        }
        self.wheel.deactivate();
    }

    fn stop_motion(&mut self) {
        self.stop_momentum();
        self.stop_wheel();
    }
}

impl<S: ScrollSurface> ScrollMomentumController<S, ManualScheduler> {
    /// Dispatches every frame due on this tick. Returns `true` if any ran.
    pub fn run_frame(&mut self) -> bool {
        let mut ran = false;
        for token in self.scheduler.take_frames() {
            ran |= self.on_frame(token);
        }
        ran
    }

    /// Runs frames until nothing is scheduled or `max_frames` ticks passed.
    ///
    /// Returns the number of ticks that dispatched a frame.
    pub fn run_until_still(&mut self, max_frames: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_frames && self.run_frame() {
            ticks += 1;
        }
        ticks
    }

    /// Advances the virtual clock and dispatches the timers that fire.
    pub fn advance_time(&mut self, ms: u64) {
        for token in self.scheduler.advance(ms) {
            self.on_timer(token);
        }
    }
}
