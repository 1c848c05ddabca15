// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the controller.

use kurbo::{Point, Vec2};

/// Platform identifier of a pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Which pointer button an event refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch contact.
    Primary,
    /// Middle mouse button.
    Auxiliary,
    /// Right mouse button.
    Secondary,
    /// Any other button, by platform index.
    Other(u8),
}

/// What a pointer press landed on, as classified by the host's hit test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The scrollable surface itself.
    Surface,
    /// A non-interactive descendant (text, image, card body).
    Content,
    /// An embedded frame.
    EmbeddedFrame,
    /// A hyperlink.
    Link,
    /// A button.
    Button,
    /// A form input.
    Input,
}

impl PointerTarget {
    /// Returns `true` for targets that handle presses themselves and must
    /// never start a drag.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            Self::EmbeddedFrame | Self::Link | Self::Button | Self::Input
        )
    }
}

/// A wheel event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in surface units.
    pub delta: Vec2,
}

impl WheelInput {
    /// Creates a wheel event from horizontal and vertical deltas.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
        }
    }

    /// The delta along the axis with the larger magnitude.
    ///
    /// Ties favor the horizontal axis, so a vertical wheel scrolls the
    /// horizontal strip.
    #[must_use]
    pub fn dominant_delta(&self) -> f64 {
        if self.delta.x.abs() >= self.delta.y.abs() {
            self.delta.x
        } else {
            self.delta.y
        }
    }
}

/// A pointer down, move, up, or cancel event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer identity, used for capture.
    pub pointer_id: PointerId,
    /// Button involved in the event.
    pub button: PointerButton,
    /// Pointer position in client coordinates.
    pub position: Point,
    /// Hit-test classification of the event target.
    pub target: PointerTarget,
}

impl PointerInput {
    /// A primary-button event on the surface at horizontal position `x`.
    #[must_use]
    pub fn primary(pointer_id: u64, x: f64) -> Self {
        Self {
            pointer_id: PointerId(pointer_id),
            button: PointerButton::Primary,
            position: Point::new(x, 0.0),
            target: PointerTarget::Surface,
        }
    }

    /// Returns a copy with a different target.
    #[must_use]
    pub fn on(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }

    /// Returns a copy with a different button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// What the host should do with an event after the controller has seen it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventDisposition {
    /// Let the platform default proceed.
    Ignored,
    /// Prevent the platform default. For clicks, also stop propagation.
    Consumed,
}

impl EventDisposition {
    /// Returns `true` for [`EventDisposition::Consumed`].
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}
