// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The origin-touch registry.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::event::{Touch, TouchEvent};
use crate::long_press::{LongPress, LongPressConfig, LongPressEmulator, LongPressSink};
use crate::platform::Platform;
use crate::strategy::{IdentifierStrategy, OriginTouch};

/// A registry shared between every gesture consumer of one document.
pub type SharedTouchRegistry = Rc<RefCell<TouchRegistry>>;

/// The document-level listener seam driven by [`TouchRegistry::mount`].
pub trait TouchHost {
    /// Start delivering capture-phase touch start/end/cancel events to the registry.
    fn attach_listeners(&mut self);

    /// Stop delivering touch events to the registry.
    fn detach_listeners(&mut self);

    /// Suppress (or restore) the platform's native long-press callout.
    fn set_callout_suppressed(&mut self, suppressed: bool) {
        let _ = suppressed;
    }
}

/// [`TouchRegistry::unmount`] was called more often than [`TouchRegistry::mount`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnbalancedUnmount;

impl fmt::Display for UnbalancedUnmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("touch registry unmounted without a matching mount")
    }
}

impl core::error::Error for UnbalancedUnmount {}

/// Touches indexed by slot; `None` where no touch of the list holds that slot.
pub type FormattedTouches = SmallVec<[Option<Touch>; 4]>;

/// Tracks every active contact at its point of first contact.
///
/// Slots are assigned by the injected [`IdentifierStrategy`] and stay stable
/// from registration until release. Releases are queued and only applied by
/// [`flush_deferred`](Self::flush_deferred), so every listener handling the
/// release event can still read the origin of the lifted touch.
pub struct TouchRegistry {
    strategy: Box<dyn IdentifierStrategy>,
    slots: Vec<Option<OriginTouch>>,
    pending_release: SmallVec<[i32; 4]>,
    mount_count: usize,
    long_press: Option<LongPressEmulator>,
}

impl fmt::Debug for TouchRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchRegistry")
            .field("strategy", &self.strategy)
            .field("slots", &self.slots)
            .field("pending_release", &self.pending_release)
            .field("mount_count", &self.mount_count)
            .field("long_press", &self.long_press.is_some())
            .finish()
    }
}

impl TouchRegistry {
    /// Creates a registry using `strategy`, without long-press emulation.
    pub fn new(strategy: impl IdentifierStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            slots: Vec::new(),
            pending_release: SmallVec::new(),
            mount_count: 0,
            long_press: None,
        }
    }

    /// Enables long-press emulation.
    #[must_use]
    pub fn with_long_press(mut self, config: LongPressConfig) -> Self {
        self.long_press = Some(LongPressEmulator::new(config));
        self
    }

    /// Creates the registry `platform` needs.
    pub fn for_platform(platform: Platform) -> Self {
        let mut registry = Self {
            strategy: platform.identifier_strategy(),
            slots: Vec::new(),
            pending_release: SmallVec::new(),
            mount_count: 0,
            long_press: None,
        };
        if let Some(config) = platform.long_press() {
            registry = registry.with_long_press(config);
        }
        registry
    }

    /// Wraps the registry for sharing between consumers.
    pub fn into_shared(self) -> SharedTouchRegistry {
        Rc::new(RefCell::new(self))
    }

    /// Number of outstanding mounts.
    pub fn mount_count(&self) -> usize {
        self.mount_count
    }

    /// Returns `true` if long-press emulation is enabled.
    pub fn emulates_long_press(&self) -> bool {
        self.long_press.is_some()
    }

    /// Registers one consumer. The first mount attaches the host listeners.
    pub fn mount<H: TouchHost + ?Sized>(&mut self, host: &mut H) {
        if self.mount_count == 0 {
            host.attach_listeners();
            if self.long_press.is_some() {
                host.set_callout_suppressed(true);
            }
            #[cfg(feature = "tracing")]
            tracing::debug!("touch registry attached");
        }
        self.mount_count += 1;
    }

    /// Releases one consumer. The last unmount detaches the host listeners.
    pub fn unmount<H: TouchHost + ?Sized>(&mut self, host: &mut H) -> Result<(), UnbalancedUnmount> {
        if self.mount_count == 0 {
            return Err(UnbalancedUnmount);
        }
        self.mount_count -= 1;
        if self.mount_count == 0 {
            host.detach_listeners();
            if let Some(long_press) = &mut self.long_press {
                long_press.cancel();
                host.set_callout_suppressed(false);
            }
            #[cfg(feature = "tracing")]
            tracing::debug!("touch registry detached");
        }
        Ok(())
    }

    /// Records every changed touch of a touch start at its strategy slot.
    pub fn register_touches_from_event(&mut self, event: &TouchEvent) {
        for touch in &event.changed_touches {
            let Some(slot) = self.strategy.registration_slot(&self.slots, touch) else {
                continue;
            };
            if self.slots.len() <= slot {
                self.slots.resize(slot + 1, None);
            }
            self.slots[slot] = Some(OriginTouch {
                identifier: touch.identifier,
                position: touch.position,
                timestamp: event.timestamp,
            });
            #[cfg(feature = "tracing")]
            tracing::trace!(identifier = touch.identifier, slot, "touch registered");
        }
        if let Some(long_press) = &mut self.long_press {
            long_press.on_touch_start(event);
        }
    }

    /// Queues the changed touches of a touch end or cancel for release.
    ///
    /// The slots stay readable until [`flush_deferred`](Self::flush_deferred).
    pub fn unregister_touches_from_event(&mut self, event: &TouchEvent) {
        self.cancel_hold();
        self.pending_release
            .extend(event.changed_touches.iter().map(|touch| touch.identifier));
    }

    /// Applies queued releases. Hosts call this once all listeners of the tick ran.
    pub fn flush_deferred(&mut self) {
        for identifier in core::mem::take(&mut self.pending_release) {
            let touch = Touch::new(identifier, 0.0, 0.0);
            let Some(slot) = self.strategy.normalize(&self.slots, &touch) else {
                continue;
            };
            if let Some(entry) = self.slots.get_mut(slot) {
                if entry.is_some_and(|origin| origin.identifier == identifier) {
                    *entry = None;
                    #[cfg(feature = "tracing")]
                    tracing::trace!(identifier, slot, "touch released");
                }
            }
        }
    }

    /// Returns `true` if releases are waiting for [`flush_deferred`](Self::flush_deferred).
    pub fn has_deferred(&self) -> bool {
        !self.pending_release.is_empty()
    }

    /// Feeds a touch move to the long-press emulation.
    pub fn track_movement(&mut self, event: &TouchEvent) {
        if let Some(long_press) = &mut self.long_press {
            long_press.on_touch_move(event);
        }
    }

    /// Cancels a pending long press, if any.
    pub fn cancel_hold(&mut self) {
        if let Some(long_press) = &mut self.long_press {
            long_press.cancel();
        }
    }

    /// Returns `true` while a long press is armed.
    pub fn hold_pending(&self) -> bool {
        self.long_press
            .as_ref()
            .is_some_and(LongPressEmulator::is_pending)
    }

    /// Fires the pending long press if its deadline has passed.
    pub fn poll_long_press<S: LongPressSink + ?Sized>(
        &mut self,
        now: u64,
        sink: &mut S,
    ) -> Option<LongPress> {
        self.long_press.as_mut()?.poll(now, sink)
    }

    /// The slot holding `touch`.
    pub fn normalize_identifier(&self, touch: &Touch) -> Option<usize> {
        self.strategy.normalize(&self.slots, touch)
    }

    /// Projects `touches` into a list indexed by slot.
    ///
    /// Touches without a slot are dropped.
    pub fn format_touches(&self, touches: &[Touch]) -> FormattedTouches {
        let mut formatted = FormattedTouches::new();
        for touch in touches {
            let Some(slot) = self.normalize_identifier(touch) else {
                continue;
            };
            if formatted.len() <= slot {
                formatted.resize(slot + 1, None);
            }
            formatted[slot] = Some(*touch);
        }
        formatted
    }

    /// The origin of the touch registered at `slot`.
    pub fn origin(&self, slot: usize) -> Option<&OriginTouch> {
        self.slots.get(slot)?.as_ref()
    }

    /// Number of occupied slots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
