// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrollable surface driven by the controller.

use bitflags::bitflags;

use crate::input::PointerId;

bitflags! {
    /// Input event kinds a controller listens for on its surface.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct InputKinds: u8 {
        /// Wheel events. The listener must be able to prevent default.
        const WHEEL = 1 << 0;
        /// Primary pointer presses.
        const POINTER_DOWN = 1 << 1;
        /// Pointer movement.
        const POINTER_MOVE = 1 << 2;
        /// Pointer releases.
        const POINTER_UP = 1 << 3;
        /// Pointer cancellation by the platform.
        const POINTER_CANCEL = 1 << 4;
        /// Clicks, delivered in the capture phase.
        const CLICK = 1 << 5;

        /// The set registered for the whole attached lifetime.
        const ATTACHED = Self::WHEEL.bits()
            | Self::POINTER_DOWN.bits()
            | Self::POINTER_MOVE.bits()
            | Self::POINTER_UP.bits()
            | Self::POINTER_CANCEL.bits();
    }
}

/// A horizontally scrollable element owned by the host.
///
/// The controller never creates or destroys the surface; it only reads its
/// geometry, writes its scroll offset, and toggles a few presentation flags.
pub trait ScrollSurface {
    /// Current horizontal scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Sets the horizontal scroll offset.
    ///
    /// Implementations clamp into `0.0..=max_scroll_offset()`, the same way a
    /// DOM element clamps `scrollLeft`.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Total scrollable content width.
    fn scroll_extent(&self) -> f64;

    /// Visible width.
    fn client_extent(&self) -> f64;

    /// Largest reachable scroll offset.
    fn max_scroll_offset(&self) -> f64 {
        (self.scroll_extent() - self.client_extent()).max(0.0)
    }

    /// Suspends (`true`) or restores (`false`) native scroll snapping and
    /// smooth scroll behavior.
    fn set_snap_suspended(&mut self, suspended: bool);

    /// Enables (`true`) or restores (`false`) drag presentation: text
    /// selection disabled and a grabbing cursor.
    fn set_grabbing(&mut self, grabbing: bool);

    /// Routes all further events of `pointer` to this surface.
    fn capture_pointer(&mut self, pointer: PointerId);

    /// Releases a capture taken with [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, pointer: PointerId);

    /// Registers listeners for `kinds`.
    fn listen(&mut self, kinds: InputKinds);

    /// Removes listeners for `kinds`.
    fn unlisten(&mut self, kinds: InputKinds);
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for &mut T {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        (**self).set_scroll_offset(offset);
    }

    fn scroll_extent(&self) -> f64 {
        (**self).scroll_extent()
    }

    fn client_extent(&self) -> f64 {
        (**self).client_extent()
    }

    fn max_scroll_offset(&self) -> f64 {
        (**self).max_scroll_offset()
    }

    fn set_snap_suspended(&mut self, suspended: bool) {
        (**self).set_snap_suspended(suspended);
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        (**self).set_grabbing(grabbing);
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        (**self).capture_pointer(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        (**self).release_pointer(pointer);
    }

    fn listen(&mut self, kinds: InputKinds) {
        (**self).listen(kinds);
    }

    fn unlisten(&mut self, kinds: InputKinds) {
        (**self).unlisten(kinds);
    }
}

/// In-memory [`ScrollSurface`] for tests and headless hosts.
///
/// ```
/// use glide_scroll::{HeadlessSurface, ScrollSurface};
///
/// let mut surface = HeadlessSurface::new(2000.0, 500.0);
/// surface.set_scroll_offset(1800.0);
/// assert_eq!(surface.scroll_offset(), 1500.0);
/// assert_eq!(surface.writes(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessSurface {
    offset: f64,
    scroll_extent: f64,
    client_extent: f64,
    snap_suspended: bool,
    grabbing: bool,
    captured: Option<PointerId>,
    listening: InputKinds,
    writes: usize,
}

impl Default for InputKinds {
    fn default() -> Self {
        Self::empty()
    }
}

impl HeadlessSurface {
    /// Creates a surface scrolled to the start.
    #[must_use]
    pub fn new(scroll_extent: f64, client_extent: f64) -> Self {
        Self {
            scroll_extent,
            client_extent,
            ..Self::default()
        }
    }

    /// Builder-style initial offset; does not count as a write.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset.clamp(0.0, self.max_scroll_offset());
        self
    }

    /// Number of calls to [`ScrollSurface::set_scroll_offset`] so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Whether native snapping is currently suspended.
    #[must_use]
    pub fn is_snap_suspended(&self) -> bool {
        self.snap_suspended
    }

    /// Whether drag presentation is currently on.
    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    /// The pointer currently captured, if any.
    #[must_use]
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured
    }

    /// The listener set currently registered.
    #[must_use]
    pub fn listening(&self) -> InputKinds {
        self.listening
    }

    /// Resizes content and viewport, re-clamping the offset.
    pub fn resize(&mut self, scroll_extent: f64, client_extent: f64) {
        self.scroll_extent = scroll_extent;
        self.client_extent = client_extent;
        self.offset = self.offset.clamp(0.0, self.max_scroll_offset());
    }
}

impl ScrollSurface for HeadlessSurface {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.writes += 1;
        self.offset = offset.clamp(0.0, self.max_scroll_offset());
    }

    fn scroll_extent(&self) -> f64 {
        self.scroll_extent
    }

    fn client_extent(&self) -> f64 {
        self.client_extent
    }

    fn set_snap_suspended(&mut self, suspended: bool) {
        self.snap_suspended = suspended;
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn listen(&mut self, kinds: InputKinds) {
        self.listening |= kinds;
    }

    fn unlisten(&mut self, kinds: InputKinds) {
        self.listening -= kinds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_clamped_like_scroll_left() {
        let mut surface = HeadlessSurface::new(2000.0, 500.0);
        surface.set_scroll_offset(-20.0);
        assert_eq!(surface.scroll_offset(), 0.0);
        surface.set_scroll_offset(9_999.0);
        assert_eq!(surface.scroll_offset(), 1500.0);
        assert_eq!(surface.writes(), 2);
    }

    #[test]
    fn content_narrower_than_viewport_cannot_scroll() {
        let mut surface = HeadlessSurface::new(300.0, 500.0);
        assert_eq!(surface.max_scroll_offset(), 0.0);
        surface.set_scroll_offset(10.0);
        assert_eq!(surface.scroll_offset(), 0.0);
    }

    #[test]
    fn listeners_accumulate_and_remove() {
        let mut surface = HeadlessSurface::new(100.0, 50.0);
        surface.listen(InputKinds::ATTACHED);
        surface.listen(InputKinds::CLICK);
        surface.unlisten(InputKinds::ATTACHED);
        assert_eq!(surface.listening(), InputKinds::CLICK);
    }

    #[test]
    fn releasing_other_pointer_keeps_capture() {
        let mut surface = HeadlessSurface::new(100.0, 50.0);
        surface.capture_pointer(PointerId(1));
        surface.release_pointer(PointerId(2));
        assert_eq!(surface.captured_pointer(), Some(PointerId(1)));
        surface.release_pointer(PointerId(1));
        assert_eq!(surface.captured_pointer(), None);
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut surface = HeadlessSurface::new(2000.0, 500.0).with_offset(1500.0);
        surface.resize(1000.0, 500.0);
        assert_eq!(surface.scroll_offset(), 500.0);
        assert_eq!(surface.writes(), 0);
    }
}
