// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure helpers for turning touch deltas into hit-test points.

use fluent_touch::{OriginTouch, Touch};
use kurbo::{Point, Vec2};

use crate::config::SelectionConfig;

/// How far `current` moved from where it first landed.
///
/// Zero when either the touch or its origin is unknown.
pub fn touch_shift(current: Option<&Touch>, origin: Option<&OriginTouch>) -> Vec2 {
    match (current, origin) {
        (Some(current), Some(origin)) => current.position - origin.position,
        _ => Vec2::ZERO,
    }
}

/// `anchor` moved by `shift`, floored at zero on both axes.
///
/// ```
/// use fluent_selection::geometry::anchor_target;
/// use kurbo::{Point, Vec2};
///
/// assert_eq!(anchor_target(Point::new(50.0, 50.0), Vec2::new(30.0, 45.0)), Point::new(80.0, 95.0));
/// assert_eq!(anchor_target(Point::new(5.0, 5.0), Vec2::new(-30.0, 1.0)), Point::new(0.0, 6.0));
/// ```
pub fn anchor_target(anchor: Point, shift: Vec2) -> Point {
    let moved = anchor + shift;
    Point::new(moved.x.max(0.0), moved.y.max(0.0))
}

/// The point to hit-test for a handle whose line box starts at `target`.
///
/// Dropping half a line into the box keeps the caret off the boundary between
/// two lines.
pub fn hit_point(target: Point, line_height: Option<f64>) -> Point {
    target + Vec2::new(0.0, line_height.unwrap_or(0.0) / 2.0)
}

/// Returns `true` when a release `travel` units below the origin, `elapsed`
/// milliseconds after first contact, dismisses the selection.
pub fn is_dismiss_swipe(travel: f64, elapsed: u64, config: &SelectionConfig) -> bool {
    travel >= config.collapse_swipe_distance && elapsed <= config.collapse_swipe_duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_measured_from_origin() {
        let origin = OriginTouch {
            identifier: 0,
            position: Point::new(100.0, 100.0),
            timestamp: 0,
        };
        let current = Touch::new(0, 130.0, 145.0);
        let shift = touch_shift(Some(&current), Some(&origin));
        assert_eq!(shift, Vec2::new(30.0, 45.0));
        assert_eq!(
            anchor_target(Point::new(50.0, 50.0), shift),
            Point::new(80.0, 95.0)
        );
        assert_eq!(touch_shift(Some(&current), None), Vec2::ZERO);
        assert_eq!(touch_shift(None, Some(&origin)), Vec2::ZERO);
    }

    #[test]
    fn targets_never_go_negative() {
        assert_eq!(
            anchor_target(Point::new(10.0, 10.0), Vec2::new(-50.0, -50.0)),
            Point::ZERO
        );
    }

    #[test]
    fn hit_point_drops_half_a_line() {
        assert_eq!(
            hit_point(Point::new(10.0, 40.0), Some(20.0)),
            Point::new(10.0, 50.0)
        );
        assert_eq!(hit_point(Point::new(10.0, 40.0), None), Point::new(10.0, 40.0));
    }

    #[test]
    fn dismiss_needs_distance_and_speed() {
        let config = SelectionConfig::default();
        assert!(is_dismiss_swipe(100.0, 300, &config));
        assert!(is_dismiss_swipe(250.0, 10, &config));
        assert!(!is_dismiss_swipe(99.0, 10, &config));
        assert!(!is_dismiss_swipe(150.0, 301, &config));
        assert!(!is_dismiss_swipe(-150.0, 10, &config));
    }
}
