// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic long-press → context-menu emulation.
//!
//! Some platforms never turn a long press into a context-menu request and
//! cannot have their native selection callout suppressed by cancelling touch
//! events. On those platforms the registry reconstructs the gesture itself:
//!
//! 1. A single new contact arms a hold timer.
//! 2. A second concurrent contact, a release, or movement beyond the tolerance
//!    cancels the timer.
//! 3. When the timer expires, [`LongPressSink::cancel_touch`] pre-empts native
//!    text selection, [`LongPressSink::open_context_menu`] asks for the menu at
//!    the touch's last known position, and a short vibration confirms it.

use fluent_host::HostServices;
use kurbo::Point;

use crate::event::TouchEvent;

/// Timing and tolerance of the long-press emulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LongPressConfig {
    /// How long a contact must be held, in milliseconds (default: 250).
    pub hold_duration: u64,
    /// Movement allowed before the hold is abandoned, in viewport units (default: 10).
    pub move_tolerance: f64,
    /// Length of the confirmation vibration, in milliseconds (default: 5).
    pub feedback_millis: u32,
}

impl Default for LongPressConfig {
    fn default() -> Self {
        Self {
            hold_duration: 250,
            move_tolerance: 10.0,
            feedback_millis: 5,
        }
    }
}

impl LongPressConfig {
    /// Sets the hold duration.
    #[must_use]
    pub fn with_hold_duration(mut self, millis: u64) -> Self {
        self.hold_duration = millis;
        self
    }

    /// Sets the movement tolerance.
    #[must_use]
    pub fn with_move_tolerance(mut self, tolerance: f64) -> Self {
        self.move_tolerance = tolerance;
        self
    }
}

/// Receives the synthetic events produced when a hold completes.
pub trait LongPressSink: HostServices {
    /// Dispatch a cancellation for the held touch so native selection never starts.
    fn cancel_touch(&mut self, identifier: i32);

    /// Dispatch a context-menu request at `position`.
    fn open_context_menu(&mut self, position: Point);
}

/// A hold that fired, as reported by [`TouchRegistry::poll_long_press`](crate::TouchRegistry::poll_long_press).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LongPress {
    /// Native identifier of the held touch.
    pub identifier: i32,
    /// Last known position of the held touch.
    pub position: Point,
}

#[derive(Copy, Clone, Debug)]
struct PendingHold {
    identifier: i32,
    origin: Point,
    position: Point,
    deadline: u64,
}

#[derive(Clone, Debug)]
pub(crate) struct LongPressEmulator {
    config: LongPressConfig,
    pending: Option<PendingHold>,
}

impl LongPressEmulator {
    pub(crate) fn new(config: LongPressConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn on_touch_start(&mut self, event: &TouchEvent) {
        if self.pending.is_some() {
            // Any additional contact abandons the hold.
            self.cancel();
            return;
        }
        if event.changed_touches.len() != 1 || event.target_touches.len() > 1 {
            return;
        }
        let touch = event.changed_touches[0];
        self.pending = Some(PendingHold {
            identifier: touch.identifier,
            origin: touch.position,
            position: touch.position,
            deadline: event.timestamp.saturating_add(self.config.hold_duration),
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(identifier = touch.identifier, "long press armed");
    }

    pub(crate) fn on_touch_move(&mut self, event: &TouchEvent) {
        let Some(hold) = &mut self.pending else {
            return;
        };
        let tolerance = self.config.move_tolerance;
        let mut exceeded = false;
        for touch in event
            .changed_touches
            .iter()
            .filter(|touch| touch.identifier == hold.identifier)
        {
            if (touch.position - hold.origin).hypot2() > tolerance * tolerance {
                exceeded = true;
            } else {
                hold.position = touch.position;
            }
        }
        if exceeded {
            self.cancel();
        }
    }

    pub(crate) fn cancel(&mut self) {
        if self.pending.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("long press cancelled");
        }
    }

    pub(crate) fn poll<S: LongPressSink + ?Sized>(
        &mut self,
        now: u64,
        sink: &mut S,
    ) -> Option<LongPress> {
        let hold = self.pending.filter(|hold| now >= hold.deadline)?;
        self.pending = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(identifier = hold.identifier, "long press fired");
        sink.cancel_touch(hold.identifier);
        sink.open_context_menu(hold.position);
        fluent_host::vibrate(
            sink,
            fluent_host::Vibration::pulse(self.config.feedback_millis),
        );
        Some(LongPress {
            identifier: hold.identifier,
            position: hold.position,
        })
    }
}
