// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent Menu: a touch context menu for links and images.
//!
//! Long pressing a link or an image opens a menu under the finger. Without
//! lifting, the finger slides up or down to hover a row; lifting it runs the
//! hovered row. Rows come from a [`MenuRegistry`] keyed by [`TargetKind`]:
//!
//! - links offer opening, copying the address or text, downloading, sharing;
//! - images offer the same for the image source, plus copying the image;
//! - images inside links offer both families.
//!
//! Every menu is framed by a cancel row at the top and a row that turns the
//! custom menu off for the rest of the session at the bottom.
//!
//! [`MenuSession`] is headless, like the selection engine: the host feeds it
//! the touched element ([`MenuSession::prepare`]), the context-menu request
//! ([`MenuSession::open`]), finger movement ([`MenuSession::hover`]) and
//! release ([`MenuSession::close`]), and renders the returned
//! [`MenuPlacement`] and [`MenuRow`]s. Commands reach the platform through
//! [`MenuHost`].
//!
//! On platforms without a native long press (see
//! [`fluent_touch::Platform::long_press`]) the session mounts the shared
//! [`fluent_touch::TouchRegistry`], whose long-press emulation then raises the
//! context-menu request.
//!
//! ## Example
//!
//! ```rust
//! use fluent_menu::{MenuConfig, MenuRegistry, MenuRow, MenuSession, MenuTarget};
//!
//! let mut session = MenuSession::new(MenuRegistry::default(), MenuConfig::default());
//! session.prepare(Some(MenuTarget::image("cat.png", Some("A cat".into()))));
//! let rows: Vec<MenuRow> = session.rows().collect();
//! assert_eq!(rows.first(), Some(&MenuRow::Cancel));
//! assert_eq!(rows.last(), Some(&MenuRow::Disable));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod registry;
mod session;
mod target;

pub use command::{Command, MenuHost};
pub use registry::{MenuEntry, MenuRegistry};
pub use session::{
    MenuConfig, MenuOutcome, MenuPlacement, MenuRow, MenuSession, MenuSide, overflow_correction,
};
pub use target::{MenuTarget, TargetKind};
