// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent Host: the platform service seam shared by the Fluent crates.
//!
//! Fluent's gesture engines never talk to a browser, an OS, or a window system
//! directly. Everything that produces a user-visible side effect outside of the
//! selection itself goes through [`HostServices`]:
//!
//! - haptic feedback ([`Vibration`]),
//! - writing text to the clipboard, with a synchronous copy-command fallback,
//! - the share sheet ([`ShareData`]).
//!
//! Every one of these is optional on real devices. Hosts advertise what they
//! support through [`Capabilities`], and the free functions [`vibrate`],
//! [`copy_text`] and [`share`] guard each call site so that a missing capability
//! degrades silently instead of surfacing an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use fluent_host::{Capabilities, CopyMethod, HostServices, Vibration, copy_text, vibrate};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     written: Vec<String>,
//!     exec_copies: usize,
//! }
//!
//! impl HostServices for Recorder {
//!     fn capabilities(&self) -> Capabilities {
//!         // No clipboard API and no vibration motor.
//!         Capabilities::empty()
//!     }
//!
//!     fn write_clipboard_text(&mut self, text: &str) {
//!         self.written.push(text.to_owned());
//!     }
//!
//!     fn exec_copy(&mut self) {
//!         self.exec_copies += 1;
//!     }
//! }
//!
//! let mut host = Recorder::default();
//! assert!(!vibrate(&mut host, Vibration::pulse(5)));
//! assert_eq!(copy_text(&mut host, "hello"), CopyMethod::ExecCommand);
//! assert!(host.written.is_empty());
//! assert_eq!(host.exec_copies, 1);
//! ```
//!
//! [`Theme`] also lives here since both the selection pad and the context menu
//! are styled with the same two variants.
//!
//! This crate is `no_std`.

#![no_std]

mod services;
mod theme;

pub use services::{
    Capabilities, CopyMethod, HostServices, ShareData, Vibration, copy_text, share, vibrate,
};
pub use theme::{ParseThemeError, Theme};
