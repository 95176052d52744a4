// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent Touch: origin-touch tracking for multi-touch gestures.
//!
//! Touch gestures are computed as deltas: *where is this finger now, compared
//! to where it first landed?* [`TouchRegistry`] answers the second half of that
//! question for every consumer of a document.
//!
//! - Every touch start is recorded as an [`OriginTouch`] (position and
//!   timestamp at first contact) in a *slot*.
//! - Slots are assigned by an [`IdentifierStrategy`]: [`NativeIdentifiers`]
//!   where the platform already hands out small stable identifiers, or
//!   [`SlotReuse`] where identifiers are opaque. Either way a touch keeps its
//!   slot until it is released, and releasing one touch never moves another.
//! - Releases are deferred until [`TouchRegistry::flush_deferred`], so listeners
//!   handling a touch end can still read the origin of the lifted touch.
//! - Mounting is reference counted. Several gesture consumers share one
//!   [`SharedTouchRegistry`], and only the first mount and last unmount reach
//!   the [`TouchHost`].
//! - On platforms that never turn a long press into a context menu, the
//!   registry can emulate one (see [`LongPressConfig`] and [`LongPressSink`]).
//!
//! Time is host-driven: events carry millisecond timestamps and pending long
//! presses fire from [`TouchRegistry::poll_long_press`].
//!
//! ## Minimal example
//!
//! ```rust
//! use fluent_touch::{Platform, Touch, TouchEvent, TouchRegistry};
//!
//! let mut registry = TouchRegistry::for_platform(Platform::AppleTouch);
//!
//! // Two fingers with opaque identifiers land one after the other.
//! let a = Touch::new(90_210, 10.0, 10.0);
//! let b = Touch::new(31_337, 80.0, 10.0);
//! registry.register_touches_from_event(&TouchEvent::new(0).with_changed(&[a]));
//! registry.register_touches_from_event(&TouchEvent::new(8).with_changed(&[b]));
//!
//! assert_eq!(registry.normalize_identifier(&a), Some(0));
//! assert_eq!(registry.normalize_identifier(&b), Some(1));
//!
//! // The first finger moved; the delta is measured from its origin.
//! let moved = Touch::new(90_210, 25.0, 40.0);
//! let origin = registry.origin(0).unwrap();
//! assert_eq!(moved.position - origin.position, kurbo::Vec2::new(15.0, 30.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod long_press;
mod platform;
mod registry;
mod strategy;

pub use event::{PointerKind, Touch, TouchEvent, TouchList};
pub use long_press::{LongPress, LongPressConfig, LongPressSink};
pub use platform::Platform;
pub use registry::{
    FormattedTouches, SharedTouchRegistry, TouchHost, TouchRegistry, UnbalancedUnmount,
};
pub use strategy::{IdentifierStrategy, MAX_NATIVE_SLOT, NativeIdentifiers, OriginTouch, SlotReuse};
