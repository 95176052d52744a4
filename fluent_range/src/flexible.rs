// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`FlexibleRange`]: a range whose anchors may cross.

use core::fmt;

use crate::native::{Coordinate, NativeRange, Position};

/// A range that reverses itself when its start anchor passes its end anchor.
///
/// The wrapped [`NativeRange`] always stores its bounds in document order. The
/// flexible range additionally remembers which position the caller last asked
/// for each anchor (the *registered* endpoints) and whether the start anchor is
/// currently the document-later one ([`is_reversed`](Self::is_reversed)).
///
/// ```
/// # #[cfg(feature = "test-helpers")]
/// # fn demo() {
/// use fluent_range::testing::GridDocument;
/// use fluent_range::{FlexibleRange, NativeRange, Position};
///
/// let doc = GridDocument::new(&["hello world"]);
/// let mut range = FlexibleRange::from_range(&doc.range(Position::new(0, 2), Position::new(0, 5)));
///
/// // Drag the start anchor past the end anchor.
/// range.set_start(Some(Position::new(0, 8)));
/// assert!(range.is_reversed());
/// assert!(!range.is_collapsed());
/// assert_eq!(range.native().start(), Position::new(0, 5));
/// assert_eq!(range.native().end(), Position::new(0, 8));
/// assert_eq!(range.registered_start(), Some(&Position::new(0, 8)));
/// # }
/// ```
#[derive(Clone)]
pub struct FlexibleRange<R: NativeRange> {
    range: R,
    registered_start: Option<Position<R::Node>>,
    registered_end: Option<Position<R::Node>>,
    start_coords: Coordinate,
    end_coords: Coordinate,
    reversed: bool,
}

impl<R> fmt::Debug for FlexibleRange<R>
where
    R: NativeRange,
    R::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexibleRange")
            .field("start", &self.range.start())
            .field("end", &self.range.end())
            .field("registered_start", &self.registered_start)
            .field("registered_end", &self.registered_end)
            .field("start_coords", &self.start_coords)
            .field("end_coords", &self.end_coords)
            .field("reversed", &self.reversed)
            .finish()
    }
}

impl<R: NativeRange> FlexibleRange<R> {
    /// Wraps `range` without registering either anchor.
    #[must_use]
    pub fn new(range: R) -> Self {
        Self {
            range,
            registered_start: None,
            registered_end: None,
            start_coords: Coordinate::default(),
            end_coords: Coordinate::default(),
            reversed: false,
        }
    }

    /// Builds a flexible range over an independent copy of `original`.
    ///
    /// Both anchors are registered from `original`'s bounds. A collapsed
    /// `original` is adopted without registering anything, so the anchors stay
    /// unset until the caller moves them.
    #[must_use]
    pub fn from_range(original: &R) -> Self {
        let mut this = Self::new(original.clone_range());
        if original.is_collapsed() {
            this.start_coords = this.leading_coords();
            this.end_coords = this.trailing_coords();
        } else {
            this.set_start(Some(original.start()));
            this.set_end(Some(original.end()));
        }
        this
    }

    /// Requests that the start anchor sit at `position`.
    ///
    /// `None` (for example, a hit-test that found no text) leaves the range
    /// untouched.
    pub fn set_start(&mut self, position: Option<Position<R::Node>>) {
        let Some(position) = position else {
            return;
        };

        self.registered_start = Some(position.clone());
        if self.reversed {
            self.range.set_end(position.clone());
        } else {
            self.range.set_start(position.clone());
        }

        if self.range.is_collapsed() {
            if let Some(end) = self.registered_end.clone().filter(|end| *end != position) {
                self.reversed = !self.reversed;
                #[cfg(feature = "tracing")]
                tracing::trace!(reversed = self.reversed, "start anchor crossed end anchor");
                if self.reversed {
                    self.range.set_start(end);
                } else {
                    self.range.set_end(end);
                }
            }
        }

        self.start_coords = if self.reversed {
            self.trailing_coords()
        } else {
            self.leading_coords()
        };
    }

    /// Requests that the end anchor sit at `position`.
    ///
    /// `None` leaves the range untouched.
    pub fn set_end(&mut self, position: Option<Position<R::Node>>) {
        let Some(position) = position else {
            return;
        };

        self.registered_end = Some(position.clone());
        if self.reversed {
            self.range.set_start(position.clone());
        } else {
            self.range.set_end(position.clone());
        }

        if self.range.is_collapsed() {
            if let Some(start) = self
                .registered_start
                .clone()
                .filter(|start| *start != position)
            {
                self.reversed = !self.reversed;
                #[cfg(feature = "tracing")]
                tracing::trace!(reversed = self.reversed, "end anchor crossed start anchor");
                if self.reversed {
                    self.range.set_end(start);
                } else {
                    self.range.set_start(start);
                }
            }
        }

        self.end_coords = if self.reversed {
            self.leading_coords()
        } else {
            self.trailing_coords()
        };
    }

    /// Swaps the anchor bookkeeping without touching the host range.
    ///
    /// Registered endpoints and coordinates trade places and the reversed flag
    /// flips. Calling this on a reversed range leaves it un-reversed with the
    /// registered start on the document-order start bound.
    pub fn reverse(&mut self) {
        core::mem::swap(&mut self.registered_start, &mut self.registered_end);
        core::mem::swap(&mut self.start_coords, &mut self.end_coords);
        self.reversed = !self.reversed;
    }

    /// Returns `true` while the start anchor is after the end anchor.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns `true` when the host range is collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.range.is_collapsed()
    }

    /// The last position requested for the start anchor.
    #[must_use]
    pub fn registered_start(&self) -> Option<&Position<R::Node>> {
        self.registered_start.as_ref()
    }

    /// The last position requested for the end anchor.
    #[must_use]
    pub fn registered_end(&self) -> Option<&Position<R::Node>> {
        self.registered_end.as_ref()
    }

    /// Viewport coordinates of the start anchor.
    #[must_use]
    pub fn start_coords(&self) -> Coordinate {
        self.start_coords
    }

    /// Viewport coordinates of the end anchor.
    #[must_use]
    pub fn end_coords(&self) -> Coordinate {
        self.end_coords
    }

    /// The wrapped host range.
    #[must_use]
    pub fn native(&self) -> &R {
        &self.range
    }

    /// Unwraps the host range.
    #[must_use]
    pub fn into_native(self) -> R {
        self.range
    }

    /// Returns `true` if the host range has the same bounds as `other`.
    #[must_use]
    pub fn same_bounds(&self, other: &R) -> bool {
        self.range.same_bounds(other)
    }

    fn leading_coords(&self) -> Coordinate {
        self.range
            .client_rects()
            .first()
            .map(Coordinate::leading)
            .unwrap_or_default()
    }

    fn trailing_coords(&self) -> Coordinate {
        self.range
            .client_rects()
            .last()
            .map(Coordinate::trailing)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GridDocument, GridRange};

    fn pos(line: usize, offset: usize) -> Position<usize> {
        Position::new(line, offset)
    }

    fn doc() -> GridDocument {
        GridDocument::new(&["the quick brown fox", "jumps over the", "lazy dog"])
    }

    fn flexible(doc: &GridDocument, start: Position<usize>, end: Position<usize>) -> FlexibleRange<GridRange> {
        FlexibleRange::from_range(&doc.range(start, end))
    }

    #[test]
    fn from_range_registers_both_anchors() {
        let doc = doc();
        let range = flexible(&doc, pos(0, 4), pos(0, 9));
        assert_eq!(range.registered_start(), Some(&pos(0, 4)));
        assert_eq!(range.registered_end(), Some(&pos(0, 9)));
        assert!(!range.is_reversed());
        assert_eq!(range.start_coords().point(), doc.caret_point(pos(0, 4)));
        assert_eq!(range.end_coords().point(), doc.caret_point(pos(0, 9)));
        assert_eq!(range.start_coords().height, Some(doc.line_height()));
    }

    #[test]
    fn from_range_copies_instead_of_aliasing() {
        let doc = doc();
        let original = doc.range(pos(0, 4), pos(0, 9));
        let mut range = FlexibleRange::from_range(&original);
        range.set_end(Some(pos(1, 2)));
        assert_eq!(original.end(), pos(0, 9));
    }

    #[test]
    fn start_past_end_reverses_and_stays_expanded() {
        let doc = doc();
        let mut range = flexible(&doc, pos(0, 4), pos(0, 9));

        range.set_start(Some(pos(1, 3)));

        assert!(range.is_reversed());
        assert!(!range.is_collapsed());
        assert_eq!(range.native().start(), pos(0, 9));
        assert_eq!(range.native().end(), pos(1, 3));
        assert_eq!(range.registered_start(), Some(&pos(1, 3)));
        assert_eq!(range.registered_end(), Some(&pos(0, 9)));
        // Reversed start sits on the trailing edge of the last rect.
        assert_eq!(range.start_coords().point(), doc.caret_point(pos(1, 3)));
    }

    #[test]
    fn end_before_registered_start_flips_back() {
        let doc = doc();
        let mut range = flexible(&doc, pos(1, 0), pos(1, 5));

        range.set_start(Some(pos(2, 2)));
        assert!(range.is_reversed());

        range.set_end(Some(pos(2, 6)));
        assert!(!range.is_reversed());
        assert_eq!(range.native().start(), pos(2, 2));
        assert_eq!(range.native().end(), pos(2, 6));
        assert_eq!(range.registered_start(), Some(&pos(2, 2)));
        assert_eq!(range.registered_end(), Some(&pos(2, 6)));
    }

    #[test]
    fn end_before_start_reverses() {
        let doc = doc();
        let mut range = flexible(&doc, pos(1, 4), pos(1, 8));

        range.set_end(Some(pos(0, 2)));

        assert!(range.is_reversed());
        assert_eq!(range.native().start(), pos(0, 2));
        assert_eq!(range.native().end(), pos(1, 4));
        assert_eq!(range.end_coords().point(), doc.caret_point(pos(0, 2)));
    }

    #[test]
    fn reversed_anchors_move_the_swapped_bounds() {
        let doc = doc();
        let mut range = flexible(&doc, pos(0, 4), pos(0, 9));
        range.set_start(Some(pos(0, 12)));
        assert!(range.is_reversed());

        // Moving the (document-later) start anchor further right moves the end bound.
        range.set_start(Some(pos(0, 15)));
        assert!(range.is_reversed());
        assert_eq!(range.native().start(), pos(0, 9));
        assert_eq!(range.native().end(), pos(0, 15));

        // Moving the (document-earlier) end anchor moves the start bound.
        range.set_end(Some(pos(0, 6)));
        assert!(range.is_reversed());
        assert_eq!(range.native().start(), pos(0, 6));
        assert_eq!(range.native().end(), pos(0, 15));
    }

    #[test]
    fn registered_anchors_track_every_request() {
        let doc = doc();
        let mut range = flexible(&doc, pos(0, 0), pos(0, 3));
        let requests = [
            (true, pos(1, 2)),
            (false, pos(0, 1)),
            (true, pos(0, 0)),
            (false, pos(2, 4)),
            (true, pos(2, 7)),
            (true, pos(2, 4)),
            (false, pos(0, 5)),
        ];
        let mut expected_start = pos(0, 0);
        let mut expected_end = pos(0, 3);
        for (is_start, position) in requests {
            if is_start {
                range.set_start(Some(position));
                expected_start = position;
            } else {
                range.set_end(Some(position));
                expected_end = position;
            }
            assert_eq!(range.registered_start(), Some(&expected_start));
            assert_eq!(range.registered_end(), Some(&expected_end));
        }
    }

    #[test]
    fn landing_on_the_other_anchor_collapses_without_flipping() {
        let doc = doc();
        let mut range = flexible(&doc, pos(0, 4), pos(0, 9));
        range.set_start(Some(pos(0, 9)));
        assert!(range.is_collapsed());
        assert!(!range.is_reversed());
    }

    #[test]
    fn absent_positions_are_ignored() {
        let doc = doc();
        let mut range = flexible(&doc, pos(0, 4), pos(0, 9));
        let before = (range.start_coords(), range.end_coords());

        range.set_start(None);
        range.set_end(None);

        assert_eq!(range.registered_start(), Some(&pos(0, 4)));
        assert_eq!(range.registered_end(), Some(&pos(0, 9)));
        assert_eq!((range.start_coords(), range.end_coords()), before);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let doc = doc();
        let mut range = flexible(&doc, pos(0, 4), pos(0, 9));
        range.set_start(Some(pos(1, 1)));

        let snapshot = (
            range.registered_start().copied(),
            range.registered_end().copied(),
            range.start_coords(),
            range.end_coords(),
            range.is_reversed(),
        );
        range.reverse();
        assert_ne!(range.is_reversed(), snapshot.4);
        assert_eq!(range.registered_start().copied(), snapshot.1);
        range.reverse();

        assert_eq!(
            (
                range.registered_start().copied(),
                range.registered_end().copied(),
                range.start_coords(),
                range.end_coords(),
                range.is_reversed(),
            ),
            snapshot
        );
    }

    #[test]
    fn collapsed_source_leaves_anchors_unregistered() {
        let doc = doc();
        let mut range = FlexibleRange::from_range(&doc.range(pos(1, 3), pos(1, 3)));
        assert!(range.registered_start().is_none());
        assert!(range.registered_end().is_none());

        range.set_end(Some(pos(1, 1)));

        assert!(range.registered_start().is_none());
        assert_eq!(range.registered_end(), Some(&pos(1, 1)));
        assert!(!range.is_reversed());
    }

    #[test]
    fn empty_rects_fall_back_to_origin_without_height() {
        let doc = GridDocument::new(&[]);
        let range = FlexibleRange::new(doc.range(pos(0, 0), pos(0, 0)));
        assert_eq!(range.start_coords(), Coordinate::default());
        assert_eq!(range.start_coords().height, None);
    }
}
