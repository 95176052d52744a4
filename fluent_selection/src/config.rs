// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fluent_host::Theme;

/// Handle height used when an endpoint has no text rectangle to measure.
pub const DEFAULT_HANDLE_HEIGHT: f64 = 18.0;

/// Tunables of a [`SelectionGestureEngine`](crate::SelectionGestureEngine).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SelectionConfig {
    /// Minimum downward travel of a swipe that dismisses the selection (default: 100).
    pub collapse_swipe_distance: f64,
    /// Maximum duration of that swipe, in milliseconds (default: 300).
    pub collapse_swipe_duration: u64,
    /// How long the pad stays inactive after a native selection change, in
    /// milliseconds (default: 500).
    pub inactivity_window: u64,
    /// Visual variant of the pad (default: dark).
    pub theme: Theme,
    /// Emit a tick vibration whenever a drag moves an endpoint (default: on).
    pub movement_feedback: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            collapse_swipe_distance: 100.0,
            collapse_swipe_duration: 300,
            inactivity_window: 500,
            theme: Theme::Dark,
            movement_feedback: true,
        }
    }
}

impl SelectionConfig {
    /// Sets the dismiss swipe thresholds.
    #[must_use]
    pub fn with_collapse_swipe(mut self, distance: f64, duration: u64) -> Self {
        self.collapse_swipe_distance = distance;
        self.collapse_swipe_duration = duration;
        self
    }

    /// Sets the pad inactivity window.
    #[must_use]
    pub fn with_inactivity_window(mut self, millis: u64) -> Self {
        self.inactivity_window = millis;
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enables or disables the movement tick vibration.
    #[must_use]
    pub fn with_movement_feedback(mut self, enabled: bool) -> Self {
        self.movement_feedback = enabled;
        self
    }
}
