// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits the host implements for the gesture engine.

use alloc::string::String;

use fluent_host::HostServices;
use fluent_range::{NativeRange, Position};
use fluent_touch::TouchHost;
use kurbo::Point;

/// Result of a caret hit-test.
///
/// Hosts resolve points either to a caret position or to a collapsed boundary
/// range; both reduce to a single position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaretHit<N> {
    /// A caret position.
    Position(Position<N>),
    /// A boundary range around the caret.
    Range {
        /// Start of the boundary range.
        start: Position<N>,
        /// End of the boundary range.
        end: Position<N>,
    },
}

impl<N> CaretHit<N> {
    /// The caret position. A range reduces to its end.
    pub fn into_position(self) -> Position<N> {
        match self {
            Self::Position(position) => position,
            Self::Range { end, .. } => end,
        }
    }
}

/// The document selection.
pub trait SelectionHost {
    /// The host's range type.
    type Range: NativeRange;

    /// Number of ranges in the selection.
    fn range_count(&self) -> usize;

    /// A handle to the range at `index`.
    fn range_at(&self, index: usize) -> Option<Self::Range>;

    /// Returns `true` when the selection is empty or a caret.
    fn is_collapsed(&self) -> bool;

    /// Clears the selection.
    fn remove_all_ranges(&mut self);

    /// Adds `range` to the selection.
    fn add_range(&mut self, range: &Self::Range);

    /// Plain text of the selection.
    fn selected_text(&self) -> String;

    /// Resolves a viewport point to a caret, or `None` when no text is there.
    fn caret_from_point(
        &self,
        point: Point,
    ) -> Option<CaretHit<<Self::Range as NativeRange>::Node>>;
}

/// Which selection handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// The handle at the start anchor.
    Start,
    /// The handle at the end anchor.
    End,
}

/// Where and how to draw one handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandlePlacement {
    /// Top-left of the handle in viewport coordinates.
    pub position: Point,
    /// Handle height, normally the line height at the endpoint.
    pub height: f64,
    /// A touch is currently dragging this handle.
    pub manipulating: bool,
}

/// The manipulation pad and its two handles.
pub trait PadSurface {
    /// Show or hide the pad as active.
    fn set_active(&mut self, active: bool);

    /// Let hit-testing fall through the pad to the content below.
    fn set_pointer_passthrough(&mut self, passthrough: bool);

    /// Start or end the pad's refresh animation.
    fn set_refreshing(&mut self, refreshing: bool) {
        let _ = refreshing;
    }

    /// Show or hide both handles.
    fn set_handles_visible(&mut self, visible: bool);

    /// Move one handle.
    fn place_handle(&mut self, side: HandleSide, placement: HandlePlacement);
}

/// Everything the gesture engine needs from its host.
pub trait GestureHost: SelectionHost + PadSurface + HostServices + TouchHost {}

impl<T> GestureHost for T where T: SelectionHost + PadSurface + HostServices + TouchHost + ?Sized {}
