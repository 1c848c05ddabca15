// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state: anchors, incremental deltas, and the moved flag.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`] from the press position and
//!    the surface's current scroll offset.
//! 2) On each move call [`DragSession::update`]; it records the incremental
//!    horizontal delta and returns the scroll offset that keeps the content
//!    under the pointer.
//! 3) [`DragSession::end`] closes the session and hands back the velocity
//!    history and whether the pointer travelled past the threshold.
//!
//! ```
//! use kurbo::Point;
//! use glide_scroll::{DragSession, PointerId};
//!
//! let mut drag = DragSession::default();
//! drag.start(PointerId(1), Point::new(400.0, 0.0), 200.0);
//!
//! // Pointer moves left by 30: content follows, offset grows by 30.
//! let offset = drag.update(Point::new(370.0, 0.0), 3.0).unwrap();
//! assert_eq!(offset, 230.0);
//! assert!(drag.has_moved());
//! ```

use kurbo::{Point, Vec2};

use crate::input::PointerId;
use crate::samples::VelocitySamples;

/// What a finished drag session leaves behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// The pointer that was captured for the session.
    pub pointer_id: PointerId,
    /// Whether travel exceeded the drag threshold at any point.
    pub moved: bool,
    /// The most recent incremental deltas.
    pub samples: VelocitySamples,
}

/// Tracks one pointer-drag session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    active: Option<Anchors>,
    moved: bool,
    samples: VelocitySamples,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Anchors {
    pointer_id: PointerId,
    start_pos: Point,
    last_pos: Point,
    scroll_at_start: f64,
}

impl DragSession {
    /// Begins a session, discarding any previous one.
    pub fn start(&mut self, pointer_id: PointerId, pos: Point, scroll_offset: f64) {
        self.active = Some(Anchors {
            pointer_id,
            start_pos: pos,
            last_pos: pos,
            scroll_at_start: scroll_offset,
        });
        self.moved = false;
        self.samples.clear();
    }

    /// Records a move and returns the scroll offset tracking the pointer 1:1.
    ///
    /// Returns `None` when no session is active. `threshold` is the travel
    /// beyond which the session counts as moved.
    pub fn update(&mut self, pos: Point, threshold: f64) -> Option<f64> {
        let anchors = self.active.as_mut()?;
        let delta = pos - anchors.last_pos;
        anchors.last_pos = pos;
        self.samples.push(delta.x);

        let total = pos - anchors.start_pos;
        if total.x.abs() > threshold {
            self.moved = true;
        }
        Some(anchors.scroll_at_start - total.x)
    }

    /// Offset of `pos` from the press position, if a session is active.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.active.map(|a| pos - a.start_pos)
    }

    /// Ends the session, returning what the release needs.
    pub fn end(&mut self) -> Option<DragRelease> {
        let anchors = self.active.take()?;
        Some(DragRelease {
            pointer_id: anchors.pointer_id,
            moved: self.moved,
            samples: self.samples,
        })
    }

    /// Returns `true` between [`start`](Self::start) and [`end`](Self::end).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the current or last session travelled past the threshold.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Captured pointer of the active session.
    #[must_use]
    pub fn pointer_id(&self) -> Option<PointerId> {
        self.active.map(|a| a.pointer_id)
    }

    /// Velocity history of the current or last session.
    #[must_use]
    pub fn samples(&self) -> &VelocitySamples {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: PointerId = PointerId(7);

    #[test]
    fn update_without_session_is_ignored() {
        let mut drag = DragSession::default();
        assert_eq!(drag.update(Point::new(10.0, 0.0), 3.0), None);
        assert!(drag.samples().is_empty());
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn incremental_deltas_are_sampled() {
        let mut drag = DragSession::default();
        drag.start(ID, Point::new(400.0, 0.0), 0.0);
        drag.update(Point::new(300.0, 0.0), 3.0);
        drag.update(Point::new(240.0, 0.0), 3.0);
        drag.update(Point::new(200.0, 0.0), 3.0);
        let got: [f64; 3] = {
            let mut it = drag.samples().iter();
            [it.next().unwrap(), it.next().unwrap(), it.next().unwrap()]
        };
        assert_eq!(got, [-100.0, -60.0, -40.0]);
    }

    #[test]
    fn offset_moves_opposite_to_pointer() {
        let mut drag = DragSession::default();
        drag.start(ID, Point::new(100.0, 0.0), 500.0);
        assert_eq!(drag.update(Point::new(150.0, 0.0), 3.0), Some(450.0));
        assert_eq!(drag.update(Point::new(20.0, 0.0), 3.0), Some(580.0));
    }

    #[test]
    fn small_travel_is_not_a_move() {
        let mut drag = DragSession::default();
        drag.start(ID, Point::new(100.0, 0.0), 0.0);
        drag.update(Point::new(102.0, 0.0), 3.0);
        drag.update(Point::new(97.0, 0.0), 3.0);
        drag.update(Point::new(103.0, 0.0), 3.0);
        assert!(!drag.has_moved());
        let release = drag.end().unwrap();
        assert!(!release.moved);
        assert_eq!(release.samples.len(), 3);
    }

    #[test]
    fn moved_flag_sticks_after_returning() {
        let mut drag = DragSession::default();
        drag.start(ID, Point::new(100.0, 0.0), 0.0);
        drag.update(Point::new(110.0, 0.0), 3.0);
        drag.update(Point::new(100.0, 0.0), 3.0);
        assert!(drag.has_moved());
    }

    #[test]
    fn vertical_travel_does_not_count() {
        let mut drag = DragSession::default();
        drag.start(ID, Point::new(100.0, 0.0), 0.0);
        drag.update(Point::new(100.0, 80.0), 3.0);
        assert!(!drag.has_moved());
        assert_eq!(
            drag.total_offset(Point::new(100.0, 80.0)),
            Some(Vec2::new(0.0, 80.0))
        );
    }

    #[test]
    fn restart_clears_history() {
        let mut drag = DragSession::default();
        drag.start(ID, Point::new(0.0, 0.0), 0.0);
        drag.update(Point::new(50.0, 0.0), 3.0);
        drag.start(PointerId(8), Point::new(10.0, 0.0), 25.0);
        assert!(drag.samples().is_empty());
        assert!(!drag.has_moved());
        assert_eq!(drag.pointer_id(), Some(PointerId(8)));
    }
}
