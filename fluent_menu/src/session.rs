// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lifetime of one context menu, from touch start to release.
//!
//! A menu is driven entirely by one finger: it opens under a long press,
//! the finger slides vertically to hover a row, and lifting the finger runs
//! the hovered row. The first row cancels and the last row switches the
//! custom menu off for the rest of the session.

use core::iter;

use fluent_host::{HostServices, Theme, Vibration};
use fluent_touch::{PointerKind, SharedTouchRegistry, TouchHost, UnbalancedUnmount};
use kurbo::{Point, Rect, Size, Vec2};

use crate::command::{Command, MenuHost};
use crate::registry::{MenuEntry, MenuRegistry};
use crate::target::MenuTarget;

/// Tunables of a [`MenuSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Visual variant (default: dark).
    pub theme: Theme,
    /// Delay between opening and measuring the menu body for overflow, in
    /// milliseconds; normally the duration of the opening transition (default: 0).
    pub overflow_delay: u64,
    /// Vibration when the menu opens, in milliseconds (default: 1).
    pub open_feedback_millis: u32,
    /// Vibration when the hovered row changes, in milliseconds (default: 20).
    pub hover_feedback_millis: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            overflow_delay: 0,
            open_feedback_millis: 1,
            hover_feedback_millis: 20,
        }
    }
}

impl MenuConfig {
    /// Sets the overflow measurement delay.
    #[must_use]
    pub fn with_overflow_delay(mut self, millis: u64) -> Self {
        self.overflow_delay = millis;
        self
    }
}

/// Which side of the viewport the menu grows from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuSide {
    /// Anchored at the touch, growing rightwards.
    Left,
    /// Anchored at the touch, growing leftwards.
    #[default]
    Right,
}

/// Where to put an opened menu.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuPlacement {
    /// Growth side.
    pub side: MenuSide,
    /// Padding from the left viewport edge, for [`MenuSide::Left`].
    pub padding_left: Option<f64>,
    /// Padding from the right viewport edge, for [`MenuSide::Right`].
    pub padding_right: Option<f64>,
    /// Padding from the top viewport edge.
    pub padding_top: f64,
}

/// One rendered row of an open menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuRow {
    /// The leading row that closes the menu without doing anything.
    Cancel,
    /// A registry entry.
    Entry(MenuEntry),
    /// The trailing row that switches the custom menu off.
    Disable,
}

impl MenuRow {
    /// Returns `true` if the row can be hovered.
    pub fn is_option(self) -> bool {
        !matches!(self, Self::Entry(MenuEntry::Divider))
    }

    /// Icon name of the row, if any.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::Cancel => Some("cancel"),
            Self::Entry(MenuEntry::Command(command)) => Some(command.icon()),
            Self::Entry(MenuEntry::Divider) => None,
            Self::Disable => Some("mobile_off"),
        }
    }
}

/// What closing the menu did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Closed on the cancel row, or cancelled.
    Cancelled,
    /// Ran a command; `executed` is `false` if the command had nothing to act on.
    Ran {
        /// The command.
        command: Command,
        /// Whether the command requested anything from the host.
        executed: bool,
    },
    /// Closed on the disable row; the session is now disabled.
    Disabled,
}

/// How far to move a menu body so it fits in the viewport.
///
/// Horizontal overflow on the left wins over overflow on the right; only
/// overflow at the bottom is corrected vertically.
pub fn overflow_correction(body: Rect, viewport: Size) -> Vec2 {
    let dx = if body.x0 < 0.0 {
        -body.x0
    } else if body.x1 > viewport.width {
        viewport.width - body.x1
    } else {
        0.0
    };
    let dy = if body.y1 > viewport.height {
        viewport.height - body.y1
    } else {
        0.0
    };
    Vec2::new(dx, dy)
}

/// State of the context menu for one document.
#[derive(Debug)]
pub struct MenuSession {
    config: MenuConfig,
    registry: MenuRegistry,
    touch: Option<SharedTouchRegistry>,
    mounted: bool,
    initialized: bool,
    disabled: bool,
    holding: bool,
    prepared: Option<MenuTarget>,
    hovering: usize,
    side: MenuSide,
    overflow_deadline: Option<u64>,
    body_offset: Vec2,
}

impl MenuSession {
    /// Creates a session offering the rows of `registry`.
    pub fn new(registry: MenuRegistry, config: MenuConfig) -> Self {
        Self {
            config,
            registry,
            touch: None,
            mounted: false,
            initialized: false,
            disabled: false,
            holding: false,
            prepared: None,
            hovering: 0,
            side: MenuSide::default(),
            overflow_deadline: None,
            body_offset: Vec2::ZERO,
        }
    }

    /// Uses `touch` for long-press emulation where the platform needs it.
    #[must_use]
    pub fn with_touch_registry(mut self, touch: SharedTouchRegistry) -> Self {
        self.touch = Some(touch);
        self
    }

    /// The configuration.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The command registry.
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    /// Mounts the touch registry if it emulates long presses.
    pub fn mount<H: TouchHost + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            return;
        }
        if let Some(touch) = &self.touch {
            let mut touch = touch.borrow_mut();
            if touch.emulates_long_press() {
                touch.mount(host);
                self.mounted = true;
            }
        }
    }

    /// Releases the touch registry mounted by [`mount`](Self::mount).
    pub fn unmount<H: TouchHost + ?Sized>(&mut self, host: &mut H) -> Result<(), UnbalancedUnmount> {
        if !self.mounted {
            return Ok(());
        }
        self.mounted = false;
        match &self.touch {
            Some(touch) => touch.borrow_mut().unmount(host),
            None => Ok(()),
        }
    }

    /// Activates the session on the first document touch.
    ///
    /// Returns `true` the first time.
    pub fn initialize(&mut self) -> bool {
        let first = !self.initialized;
        self.initialized = true;
        first
    }

    /// Whether the user switched the custom menu off.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the menu is open.
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// The element the next (or current) menu is for.
    pub fn target(&self) -> Option<&MenuTarget> {
        self.prepared.as_ref()
    }

    /// Index of the hovered row in [`rows`](Self::rows).
    pub fn hovering(&self) -> usize {
        self.hovering
    }

    /// Growth side of the open menu.
    pub fn side(&self) -> MenuSide {
        self.side
    }

    /// Overflow correction currently applied to the menu body.
    pub fn body_offset(&self) -> Vec2 {
        self.body_offset
    }

    /// Touch start anywhere: remembers what the touch landed on.
    ///
    /// Ignored while a menu is open.
    pub fn prepare(&mut self, target: Option<MenuTarget>) {
        if !self.holding {
            self.prepared = target;
        }
    }

    /// Context-menu request: opens the menu at `position`.
    ///
    /// Only touch requests on a prepared target open the custom menu; `None`
    /// tells the host to let the native menu through.
    pub fn open<H: HostServices + ?Sized>(
        &mut self,
        host: &mut H,
        pointer: PointerKind,
        position: Point,
        viewport: Size,
        now: u64,
    ) -> Option<MenuPlacement> {
        if self.disabled || !self.initialized || pointer != PointerKind::Touch {
            return None;
        }
        let target = self.prepared.as_ref()?;
        if self.registry.entries(target.kind).is_empty() {
            return None;
        }

        let side = if position.x >= viewport.width / 2.0 {
            MenuSide::Right
        } else {
            MenuSide::Left
        };
        let placement = MenuPlacement {
            side,
            padding_left: (side == MenuSide::Left).then_some(position.x),
            padding_right: (side == MenuSide::Right).then_some(viewport.width - position.x),
            padding_top: position.y,
        };

        self.side = side;
        self.holding = true;
        self.hovering = 0;
        self.overflow_deadline = Some(now.saturating_add(self.config.overflow_delay));
        fluent_host::vibrate(host, Vibration::pulse(self.config.open_feedback_millis));
        #[cfg(feature = "tracing")]
        tracing::debug!(?side, "context menu opened");
        Some(placement)
    }

    /// The rows of the menu for the prepared target.
    ///
    /// Empty when nothing is prepared.
    pub fn rows(&self) -> impl Iterator<Item = MenuRow> + '_ {
        self.prepared
            .as_ref()
            .map(|target| self.registry.entries(target.kind))
            .into_iter()
            .flat_map(|entries| {
                iter::once(MenuRow::Cancel)
                    .chain(entries.iter().copied().map(MenuRow::Entry))
                    .chain(iter::once(MenuRow::Disable))
            })
    }

    /// The hovered row.
    pub fn hovered_row(&self) -> Option<MenuRow> {
        self.rows().nth(self.hovering)
    }

    /// Touch move while open: hovers the lowest option whose top is above
    /// `touch_y`, falling back to the cancel row.
    ///
    /// `row_tops` holds the top edge of every row of [`rows`](Self::rows).
    /// Returns `true` if the hovered row changed.
    pub fn hover<H: HostServices + ?Sized>(
        &mut self,
        host: &mut H,
        touch_y: f64,
        row_tops: &[f64],
    ) -> bool {
        if !self.holding {
            return false;
        }
        let target = self
            .rows()
            .zip(row_tops)
            .enumerate()
            .filter(|(_, (row, _))| row.is_option())
            .filter(|(index, (_, top))| touch_y >= **top || *index == 0)
            .map(|(index, _)| index)
            .last();
        let Some(target) = target else {
            return false;
        };
        if target == self.hovering {
            return false;
        }
        self.hovering = target;
        fluent_host::vibrate(host, Vibration::pulse(self.config.hover_feedback_millis));
        true
    }

    /// Fires the overflow measurement once its delay has passed.
    ///
    /// `body` is the current viewport rectangle of the menu body. Returns the
    /// correction to apply to it.
    pub fn advance(&mut self, now: u64, body: Rect, viewport: Size) -> Option<Vec2> {
        match self.overflow_deadline {
            Some(deadline) if now >= deadline => {
                self.overflow_deadline = None;
                self.body_offset = overflow_correction(body, viewport);
                Some(self.body_offset)
            }
            _ => None,
        }
    }

    /// Touch end while open: closes the menu and runs the hovered row.
    pub fn close<H: MenuHost + ?Sized>(&mut self, host: &mut H) -> Option<MenuOutcome> {
        if !self.holding {
            return None;
        }
        let row = self.hovered_row();
        self.holding = false;
        self.hovering = 0;
        self.overflow_deadline = None;
        self.body_offset = Vec2::ZERO;

        let outcome = match row {
            Some(MenuRow::Entry(MenuEntry::Command(command))) => {
                let executed = self
                    .prepared
                    .as_ref()
                    .is_some_and(|target| command.execute(target, host));
                MenuOutcome::Ran { command, executed }
            }
            Some(MenuRow::Disable) => {
                if let Err(_err) = self.disable(host) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%_err, "touch registry already released");
                }
                MenuOutcome::Disabled
            }
            _ => MenuOutcome::Cancelled,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?outcome, "context menu closed");
        Some(outcome)
    }

    /// Touch cancel or click: closes the menu without running anything.
    pub fn cancel<H: MenuHost + ?Sized>(&mut self, host: &mut H) -> Option<MenuOutcome> {
        self.hovering = 0;
        self.close(host)
    }

    /// Switches the custom menu off and releases the touch registry.
    pub fn disable<H: TouchHost + ?Sized>(&mut self, host: &mut H) -> Result<(), UnbalancedUnmount> {
        self.disabled = true;
        self.holding = false;
        self.overflow_deadline = None;
        self.unmount(host)
    }
}
