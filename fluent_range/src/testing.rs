// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed-grid text document implementing [`NativeRange`], for tests and benchmarks.
//!
//! Each line of the document is its own node (identified by its line index).
//! Every character occupies one cell of [`CELL_WIDTH`] by [`LINE_HEIGHT`]
//! viewport units, and line `n` starts at `y = n * LINE_HEIGHT`.
//!
//! [`GridRange`] clones share the same live bounds, like handles to a DOM
//! range; [`NativeRange::clone_range`] makes an independent copy.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Point, Rect, Vec2};

use crate::native::{NativeRange, Position};

/// Width of one character cell.
pub const CELL_WIDTH: f64 = 10.0;
/// Height of one line.
pub const LINE_HEIGHT: f64 = 20.0;

#[derive(Debug)]
struct Lines {
    text: Vec<String>,
    lengths: Vec<usize>,
}

/// A monospace document laid out on a fixed grid.
#[derive(Clone, Debug)]
pub struct GridDocument {
    lines: Rc<Lines>,
}

impl GridDocument {
    /// Lays out `lines`, one node per line.
    #[must_use]
    pub fn new(lines: &[&str]) -> Self {
        let text: Vec<String> = lines.iter().map(|line| String::from(*line)).collect();
        let lengths = text.iter().map(|line| line.chars().count()).collect();
        Self {
            lines: Rc::new(Lines { text, lengths }),
        }
    }

    /// Number of lines (nodes).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.lengths.len()
    }

    /// Height of every line.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        LINE_HEIGHT
    }

    /// Creates a live range between two positions.
    ///
    /// The bounds are stored as given; callers are expected to pass them in
    /// document order.
    #[must_use]
    pub fn range(&self, start: Position<usize>, end: Position<usize>) -> GridRange {
        GridRange {
            lines: Rc::clone(&self.lines),
            bounds: Rc::new(Cell::new((start, end))),
        }
    }

    /// Top-left corner of the caret cell at `position`.
    #[must_use]
    pub fn caret_point(&self, position: Position<usize>) -> Point {
        caret_point(position)
    }

    /// Resolves a viewport point to the nearest caret position.
    ///
    /// Points above, left of, or below the text resolve to nothing, mirroring a
    /// host hit-test that lands on no text node.
    #[must_use]
    pub fn caret_at(&self, point: Point) -> Option<Position<usize>> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "both coordinates are checked non-negative above."
        )]
        let (line, column) = (
            (point.y / LINE_HEIGHT) as usize,
            (point.x / CELL_WIDTH + 0.5) as usize,
        );
        let length = *self.lines.lengths.get(line)?;
        Some(Position::new(line, column.min(length)))
    }

    /// The text between two positions, lines joined with `\n`.
    #[must_use]
    pub fn text_between(&self, start: Position<usize>, end: Position<usize>) -> String {
        let mut out = String::new();
        for line in start.node..=end.node {
            let Some(text) = self.lines.text.get(line) else {
                break;
            };
            let from = if line == start.node { start.offset } else { 0 };
            let to = if line == end.node {
                end.offset
            } else {
                self.lines.lengths[line]
            };
            if line != start.node {
                out.push('\n');
            }
            out.extend(text.chars().skip(from).take(to.saturating_sub(from)));
        }
        out
    }
}

/// A live range over a [`GridDocument`].
#[derive(Clone, Debug)]
pub struct GridRange {
    lines: Rc<Lines>,
    bounds: Rc<Cell<(Position<usize>, Position<usize>)>>,
}

impl GridRange {
    /// The text covered by the range.
    #[must_use]
    pub fn text(&self) -> String {
        let (start, end) = self.bounds.get();
        GridDocument {
            lines: Rc::clone(&self.lines),
        }
        .text_between(start, end)
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "grid documents in tests stay far below 2^52 cells."
)]
fn caret_point(position: Position<usize>) -> Point {
    Point::new(
        position.offset as f64 * CELL_WIDTH,
        position.node as f64 * LINE_HEIGHT,
    )
}

fn order(position: &Position<usize>) -> (usize, usize) {
    (position.node, position.offset)
}

impl NativeRange for GridRange {
    type Node = usize;

    fn start(&self) -> Position<usize> {
        self.bounds.get().0
    }

    fn end(&self) -> Position<usize> {
        self.bounds.get().1
    }

    fn set_start(&mut self, position: Position<usize>) {
        let (_, end) = self.bounds.get();
        if order(&position) > order(&end) {
            self.bounds.set((position, position));
        } else {
            self.bounds.set((position, end));
        }
    }

    fn set_end(&mut self, position: Position<usize>) {
        let (start, _) = self.bounds.get();
        if order(&position) < order(&start) {
            self.bounds.set((position, position));
        } else {
            self.bounds.set((start, position));
        }
    }

    fn clone_range(&self) -> Self {
        Self {
            lines: Rc::clone(&self.lines),
            bounds: Rc::new(Cell::new(self.bounds.get())),
        }
    }

    fn client_rects(&self) -> Vec<Rect> {
        let (start, end) = self.bounds.get();
        let mut rects = Vec::new();
        for line in start.node..=end.node {
            let Some(&length) = self.lines.lengths.get(line) else {
                break;
            };
            let from = if line == start.node { start.offset } else { 0 };
            let to = if line == end.node { end.offset } else { length };
            let top_left = caret_point(Position::new(line, from));
            let bottom_right = caret_point(Position::new(line, to)) + Vec2::new(0.0, LINE_HEIGHT);
            rects.push(Rect::from_points(top_left, bottom_right));
        }
        rects
    }
}
