// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch identifier normalization strategies.
//!
//! Gesture code addresses touches by *slot*: slot 0 is the first finger down,
//! slot 1 the second, and so on. How a native identifier maps to a slot depends
//! on the platform:
//!
//! - [`NativeIdentifiers`]: platforms that hand out small, stable identifiers
//!   starting at zero. The slot is the identifier itself.
//! - [`SlotReuse`]: platforms whose identifiers are large, opaque, or reused.
//!   A new touch takes the first vacant slot (or a new one at the end) and keeps
//!   it until released.

use core::fmt;

use kurbo::Point;

use crate::event::Touch;

/// Identifiers at or above this value are not tracked by [`NativeIdentifiers`].
pub const MAX_NATIVE_SLOT: usize = 64;

/// A touch as it was when it first made contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OriginTouch {
    /// Native identifier of the contact.
    pub identifier: i32,
    /// Viewport position at first contact.
    pub position: Point,
    /// Timestamp of the event that registered the contact, in milliseconds.
    pub timestamp: u64,
}

/// Maps native touch identifiers to registry slots.
pub trait IdentifierStrategy: fmt::Debug {
    /// The slot a newly registered touch should occupy, or `None` to ignore it.
    fn registration_slot(&self, slots: &[Option<OriginTouch>], touch: &Touch) -> Option<usize>;

    /// The slot currently holding `touch`.
    fn normalize(&self, slots: &[Option<OriginTouch>], touch: &Touch) -> Option<usize>;
}

/// The slot is the native identifier.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeIdentifiers;

impl NativeIdentifiers {
    fn slot(touch: &Touch) -> Option<usize> {
        usize::try_from(touch.identifier)
            .ok()
            .filter(|slot| *slot < MAX_NATIVE_SLOT)
    }
}

impl IdentifierStrategy for NativeIdentifiers {
    fn registration_slot(&self, _: &[Option<OriginTouch>], touch: &Touch) -> Option<usize> {
        Self::slot(touch)
    }

    fn normalize(&self, _: &[Option<OriginTouch>], touch: &Touch) -> Option<usize> {
        Self::slot(touch)
    }
}

/// New touches take the first vacant slot.
#[derive(Copy, Clone, Debug, Default)]
pub struct SlotReuse;

impl IdentifierStrategy for SlotReuse {
    fn registration_slot(&self, slots: &[Option<OriginTouch>], touch: &Touch) -> Option<usize> {
        self.normalize(slots, touch).or_else(|| {
            Some(
                slots
                    .iter()
                    .position(Option::is_none)
                    .unwrap_or(slots.len()),
            )
        })
    }

    fn normalize(&self, slots: &[Option<OriginTouch>], touch: &Touch) -> Option<usize> {
        slots.iter().position(|slot| {
            slot.is_some_and(|origin| origin.identifier == touch.identifier)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(identifier: i32) -> Option<OriginTouch> {
        Some(OriginTouch {
            identifier,
            position: Point::ZERO,
            timestamp: 0,
        })
    }

    #[test]
    fn native_slots_follow_identifiers() {
        let strategy = NativeIdentifiers;
        assert_eq!(strategy.registration_slot(&[], &Touch::new(3, 0.0, 0.0)), Some(3));
        assert_eq!(strategy.normalize(&[], &Touch::new(0, 0.0, 0.0)), Some(0));
        assert_eq!(strategy.normalize(&[], &Touch::new(-1, 0.0, 0.0)), None);
        assert_eq!(strategy.normalize(&[], &Touch::new(1 << 20, 0.0, 0.0)), None);
    }

    #[test]
    fn slot_reuse_fills_first_gap() {
        let strategy = SlotReuse;
        let slots = [origin(900), None, origin(77)];
        assert_eq!(strategy.registration_slot(&slots, &Touch::new(5, 0.0, 0.0)), Some(1));
        assert_eq!(strategy.registration_slot(&slots[..1], &Touch::new(5, 0.0, 0.0)), Some(1));
        assert_eq!(strategy.normalize(&slots, &Touch::new(77, 0.0, 0.0)), Some(2));
        assert_eq!(strategy.normalize(&slots, &Touch::new(5, 0.0, 0.0)), None);
    }

    #[test]
    fn slot_reuse_keeps_existing_slot_for_known_identifier() {
        let strategy = SlotReuse;
        let slots = [None, origin(42)];
        assert_eq!(strategy.registration_slot(&slots, &Touch::new(42, 0.0, 0.0)), Some(1));
    }
}
