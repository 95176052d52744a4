// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent Range: a self-correcting bidirectional text range.
//!
//! Host text ranges (the DOM `Range`, for instance) always keep their bounds in
//! document order. Setting the end before the start, or the start after the
//! end, silently collapses them. That is the wrong behavior for touch handles,
//! where a user is free to drag the selection end leftwards past its start.
//!
//! [`FlexibleRange`] decouples *what the user is dragging* from *which host
//! bound that corresponds to*:
//!
//! - It records the last position requested for each anchor (the *registered*
//!   start and end), independent of how the host stores them.
//! - When a request would collapse the host range onto a position that differs
//!   from the opposite anchor, the anchors have crossed: the range flips its
//!   reversed flag and re-applies the opposite anchor so the host range opens
//!   back up.
//! - After every mutation it recomputes viewport [`Coordinate`]s for both
//!   anchors from the host's client rects, ready for handle placement.
//!
//! The crate knows nothing about layout. Hosts implement [`NativeRange`] over
//! their own content tree; the `test-helpers` feature provides
//! [`testing::GridDocument`], a monospace grid document used by the Fluent
//! test suites and benchmarks.
//!
//! ## Minimal example
//!
//! ```rust
//! # #[cfg(feature = "test-helpers")]
//! # fn demo() {
//! use fluent_range::testing::GridDocument;
//! use fluent_range::{FlexibleRange, Position};
//!
//! let doc = GridDocument::new(&["drag me around"]);
//! let mut range = FlexibleRange::from_range(&doc.range(Position::new(0, 5), Position::new(0, 7)));
//!
//! // Drag the end anchor before the start anchor.
//! range.set_end(Some(Position::new(0, 1)));
//! assert!(range.is_reversed());
//! assert_eq!(range.registered_end(), Some(&Position::new(0, 1)));
//!
//! // Once the gesture settles, swap the bookkeeping back into document order.
//! range.reverse();
//! assert!(!range.is_reversed());
//! assert_eq!(range.registered_start(), Some(&Position::new(0, 1)));
//! # }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flexible;
mod native;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use flexible::FlexibleRange;
pub use native::{Coordinate, NativeRange, Position};
