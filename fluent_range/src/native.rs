// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host range contract.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// A boundary point: a node in the host's content tree plus an offset into it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position<N> {
    /// The container node.
    pub node: N,
    /// Character (or child) offset within `node`.
    pub offset: usize,
}

impl<N> Position<N> {
    /// Creates a position.
    #[must_use]
    pub const fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Viewport coordinates of one selection endpoint, used for handle placement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Horizontal viewport coordinate.
    pub x: f64,
    /// Top of the line box the endpoint sits on.
    pub y: f64,
    /// Line height, or `None` when no text rectangle backs the endpoint.
    pub height: Option<f64>,
}

impl Coordinate {
    /// The `(x, y)` part as a point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Coordinates of the left edge of `rect`.
    #[must_use]
    pub fn leading(rect: &Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            height: Some(rect.height()),
        }
    }

    /// Coordinates of the right edge of `rect`.
    #[must_use]
    pub fn trailing(rect: &Rect) -> Self {
        Self {
            x: rect.x1,
            y: rect.y0,
            height: Some(rect.height()),
        }
    }
}

/// A host text range whose bounds are kept in document order.
///
/// Implementations must follow DOM `Range` semantics:
/// - [`set_start`](NativeRange::set_start) with a position after the current
///   end collapses the range onto the new start.
/// - [`set_end`](NativeRange::set_end) with a position before the current
///   start collapses the range onto the new end.
///
/// `Clone` may produce a handle to the *same* live range (as a `web_sys::Range`
/// clone does); [`clone_range`](NativeRange::clone_range) must produce an
/// independent copy.
pub trait NativeRange: Clone {
    /// Node handle type of the host content tree.
    type Node: Clone + PartialEq;

    /// The document-order start bound.
    fn start(&self) -> Position<Self::Node>;

    /// The document-order end bound.
    fn end(&self) -> Position<Self::Node>;

    /// Moves the start bound, collapsing onto it if it passes the end.
    fn set_start(&mut self, position: Position<Self::Node>);

    /// Moves the end bound, collapsing onto it if it precedes the start.
    fn set_end(&mut self, position: Position<Self::Node>);

    /// Returns an independent range with the same bounds.
    #[must_use]
    fn clone_range(&self) -> Self;

    /// Viewport rectangles covering the range, in document order.
    ///
    /// A collapsed range inside text usually yields a single zero-width rect.
    fn client_rects(&self) -> Vec<Rect>;

    /// Returns `true` when start and end coincide.
    fn is_collapsed(&self) -> bool {
        self.start() == self.end()
    }

    /// Returns `true` if both bounds equal those of `other`.
    fn same_bounds(&self, other: &Self) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }
}
