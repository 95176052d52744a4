// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent Selection: drag both ends of a text selection with one or two fingers.
//!
//! Native selection handles on touch devices are small, inconsistent across
//! platforms, and impossible to restyle. This crate replaces them with a
//! *manipulation pad*: an overlay that turns finger movement anywhere on the
//! pad into movement of the selection anchors.
//!
//! [`SelectionGestureEngine`] is a state machine with three phases
//! ([`GesturePhase`]):
//!
//! - **Idle**: nothing to do until a touch pointer goes down.
//! - **Armed**: the next selection change was probably caused by the user's
//!   finger, so it may show the pad.
//! - **Manipulating**: one or two fingers are dragging anchors. The first
//!   finger moves the end anchor, the second moves the start anchor.
//!
//! Each anchor target is computed as *origin anchor + (finger now − finger at
//! first contact)*, floored at zero, and resolved to a text position through
//! the host's caret hit-test. The resolved positions feed a
//! [`fluent_range::FlexibleRange`], so dragging one anchor past the other
//! simply flips the range instead of collapsing it.
//!
//! The engine is headless. The host implements [`SelectionHost`] (the
//! document selection and caret hit-testing), [`PadSurface`] (pad and handle
//! visuals), [`fluent_host::HostServices`] and [`fluent_touch::TouchHost`], and
//! forwards events to the engine methods listed on [`SelectionGestureEngine`].
//! Timers are deadlines compared against host timestamps in
//! [`SelectionGestureEngine::advance`].
//!
//! Platform differences in how the native selection reacts to the pad live in
//! [`SelectionQuirks`]; [`quirks_for`] picks them from a
//! [`fluent_touch::Platform`].
//!
//! Tunables are in [`SelectionConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
pub mod geometry;
mod host;
mod quirks;

pub use config::{DEFAULT_HANDLE_HEIGHT, SelectionConfig};
pub use engine::{GesturePhase, SelectionGestureEngine};
pub use host::{CaretHit, GestureHost, HandlePlacement, HandleSide, PadSurface, SelectionHost};
pub use quirks::{SelectionQuirks, StandardQuirks, WebKitTouchQuirks, quirks_for};
