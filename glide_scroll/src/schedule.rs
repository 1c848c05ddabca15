// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame and timer scheduling seam.
//!
//! The controller never runs callbacks itself. It asks a [`Scheduler`] for a
//! frame or a timer and receives an opaque token; when the host later fires
//! that frame or timer it hands the token back via
//! [`ScrollMomentumController::on_frame`](crate::ScrollMomentumController::on_frame)
//! or [`ScrollMomentumController::on_timer`](crate::ScrollMomentumController::on_timer).
//!
//! A browser host maps this to `requestAnimationFrame`/`setTimeout`, a game
//! loop maps it to its fixed tick. [`ManualScheduler`] is a small
//! deterministic implementation for tests and headless hosts.

use smallvec::SmallVec;

/// Handle to a requested animation frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Handle to a pending one-shot timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Host scheduling primitives.
///
/// Cancelling a token that already fired or was already cancelled must be a
/// no-op.
pub trait Scheduler {
    /// Requests a callback on the next animation frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a requested frame before it fires.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Requests a callback after `delay_ms` milliseconds.
    fn set_timer(&mut self, delay_ms: u32) -> TimerToken;

    /// Cancels a pending timer before it fires.
    fn cancel_timer(&mut self, token: TimerToken);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn request_frame(&mut self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token);
    }

    fn set_timer(&mut self, delay_ms: u32) -> TimerToken {
        (**self).set_timer(delay_ms)
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        (**self).cancel_timer(token);
    }
}

/// Deterministic fixed-tick scheduler with a virtual millisecond clock.
///
/// ```
/// use glide_scroll::{ManualScheduler, Scheduler};
///
/// let mut sched = ManualScheduler::new();
/// let frame = sched.request_frame();
/// let timer = sched.set_timer(200);
///
/// assert_eq!(sched.take_frames().as_slice(), &[frame]);
/// assert!(sched.take_frames().is_empty());
///
/// assert!(sched.advance(199).is_empty());
/// assert_eq!(sched.advance(1).as_slice(), &[timer]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    now_ms: u64,
    frames: SmallVec<[FrameToken; 2]>,
    timers: SmallVec<[(TimerToken, u64); 2]>,
}

impl ManualScheduler {
    /// Creates a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of frames requested and not yet taken or cancelled.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of timers set and not yet fired or cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Drains the frames that are due on this tick, in request order.
    ///
    /// Frames requested while the returned tokens are being dispatched land
    /// on the following tick.
    pub fn take_frames(&mut self) -> SmallVec<[FrameToken; 2]> {
        core::mem::take(&mut self.frames)
    }

    /// Advances the clock and returns the timers that became due, ordered by
    /// deadline.
    pub fn advance(&mut self, ms: u64) -> SmallVec<[TimerToken; 2]> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;
        let mut due: SmallVec<[(TimerToken, u64); 2]> = SmallVec::new();
        self.timers.retain(|&mut (token, deadline)| {
            if deadline <= now {
                due.push((token, deadline));
                false
            } else {
                true
            }
        });
        due.sort_unstable_by_key(|&(token, deadline)| (deadline, token.0));
        due.into_iter().map(|(token, _)| token).collect()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id());
        self.frames.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frames.retain(|t| *t != token);
    }

    fn set_timer(&mut self, delay_ms: u32) -> TimerToken {
        let token = TimerToken(self.next_id());
        let deadline = self.now_ms.saturating_add(u64::from(delay_ms));
        self.timers.push((token, deadline));
        token
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        self.timers.retain(|(t, _)| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_across_kinds() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame();
        let b = sched.set_timer(10);
        let c = sched.request_frame();
        assert_ne!(a.0, b.0);
        assert_ne!(a, c);
        assert_ne!(b.0, c.0);
    }

    #[test]
    fn cancelled_frame_is_not_taken() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame();
        let b = sched.request_frame();
        sched.cancel_frame(a);
        assert_eq!(sched.take_frames().as_slice(), &[b]);
        assert_eq!(sched.pending_frames(), 0);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut sched = ManualScheduler::new();
        let t = sched.set_timer(5);
        assert_eq!(sched.advance(5).as_slice(), &[t]);
        sched.cancel_timer(t);
        assert_eq!(sched.pending_timers(), 0);
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut sched = ManualScheduler::new();
        let late = sched.set_timer(30);
        let early = sched.set_timer(10);
        let fired = sched.advance(100);
        assert_eq!(fired.as_slice(), &[early, late]);
        assert_eq!(sched.now_ms(), 100);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut sched = ManualScheduler::new();
        let t = sched.set_timer(200);
        sched.advance(100);
        sched.cancel_timer(t);
        assert!(sched.advance(1_000).is_empty());
    }
}
