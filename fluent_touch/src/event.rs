// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch and pointer event payloads delivered by the host.

use kurbo::Point;
use smallvec::SmallVec;

/// One contact point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// The identifier the platform assigned to this contact.
    pub identifier: i32,
    /// Viewport (client) coordinates.
    pub position: Point,
}

impl Touch {
    /// Creates a touch at `(x, y)`.
    #[must_use]
    pub const fn new(identifier: i32, x: f64, y: f64) -> Self {
        Self {
            identifier,
            position: Point::new(x, y),
        }
    }
}

/// A list of touches, inline for the common one- and two-finger cases.
pub type TouchList = SmallVec<[Touch; 4]>;

/// A touch event as seen by the registry and the gesture engines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// Host timestamp in milliseconds.
    pub timestamp: u64,
    /// Touches that started, moved, or ended with this event.
    pub changed_touches: TouchList,
    /// Touches still on the surface that received the event.
    pub target_touches: TouchList,
}

impl TouchEvent {
    /// Creates an event with no touches at `timestamp`.
    #[must_use]
    pub fn new(timestamp: u64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    /// Sets the changed touches.
    #[must_use]
    pub fn with_changed(mut self, touches: &[Touch]) -> Self {
        self.changed_touches = SmallVec::from_slice(touches);
        self
    }

    /// Sets the touches remaining on the target surface.
    #[must_use]
    pub fn with_targets(mut self, touches: &[Touch]) -> Self {
        self.target_touches = SmallVec::from_slice(touches);
        self
    }
}

/// The device type behind a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A finger on a touch screen.
    Touch,
    /// A mouse.
    Mouse,
    /// A stylus.
    Pen,
}
