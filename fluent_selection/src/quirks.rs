// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native selection quirks.
//!
//! Hosts disagree on what happens to the document selection while a custom
//! pad is being dragged. A [`SelectionQuirks`] value tells the engine when it
//! has to push its live range back into the host selection.

use alloc::boxed::Box;
use core::fmt;

use fluent_touch::Platform;

/// When the engine must re-install its live range as the host selection.
pub trait SelectionQuirks: fmt::Debug {
    /// The host collapses its selection on every touch frame.
    fn resync_every_frame(&self) -> bool;

    /// Interacting with the pad (lifting a finger, double tapping) clears the
    /// host selection.
    fn resync_on_interaction(&self) -> bool;
}

/// Hosts that keep the installed range as the selection.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardQuirks;

impl SelectionQuirks for StandardQuirks {
    fn resync_every_frame(&self) -> bool {
        false
    }

    fn resync_on_interaction(&self) -> bool {
        false
    }
}

/// Hosts that copy ranges into the selection and drop it on UI interaction.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebKitTouchQuirks;

impl SelectionQuirks for WebKitTouchQuirks {
    fn resync_every_frame(&self) -> bool {
        true
    }

    fn resync_on_interaction(&self) -> bool {
        true
    }
}

/// The quirks of `platform`.
pub fn quirks_for(platform: Platform) -> Box<dyn SelectionQuirks> {
    match platform {
        Platform::Standard => Box::new(StandardQuirks),
        Platform::AppleTouch => Box::new(WebKitTouchQuirks),
    }
}
