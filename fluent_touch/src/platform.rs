// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform detection and the per-platform touch behavior.

use alloc::boxed::Box;

use crate::long_press::LongPressConfig;
use crate::strategy::{IdentifierStrategy, NativeIdentifiers, SlotReuse};

/// The platform family the host runs on, decided once at start-up.
///
/// Everything platform-specific in Fluent is derived from this value: the
/// touch identifier strategy, whether long presses are emulated, and (in
/// `fluent_selection`) the native selection quirks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Small stable touch identifiers, native context menus.
    #[default]
    Standard,
    /// Opaque touch identifiers, no long-press context menu, and a native
    /// selection that collapses on touch frames and UI interaction.
    AppleTouch,
}

impl Platform {
    /// Classifies a user agent string.
    ///
    /// ```
    /// use fluent_touch::Platform;
    ///
    /// let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    /// assert_eq!(Platform::from_user_agent(ua), Platform::AppleTouch);
    /// assert_eq!(Platform::from_user_agent("Mozilla/5.0 (Linux; Android 14)"), Platform::Standard);
    /// ```
    pub fn from_user_agent(user_agent: &str) -> Self {
        const NEEDLES: [&[u8]; 3] = [b"iphone", b"ipod", b"ipad"];
        let haystack = user_agent.as_bytes();
        let found = NEEDLES.iter().any(|needle| {
            haystack
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle))
        });
        if found { Self::AppleTouch } else { Self::Standard }
    }

    /// The identifier strategy for this platform.
    pub fn identifier_strategy(self) -> Box<dyn IdentifierStrategy> {
        match self {
            Self::Standard => Box::new(NativeIdentifiers),
            Self::AppleTouch => Box::new(SlotReuse),
        }
    }

    /// Long-press emulation settings, if this platform needs them.
    pub fn long_press(self) -> Option<LongPressConfig> {
        match self {
            Self::Standard => None,
            Self::AppleTouch => Some(LongPressConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_match_ignores_case() {
        assert_eq!(Platform::from_user_agent("x IPAD y"), Platform::AppleTouch);
        assert_eq!(Platform::from_user_agent("ipod touch"), Platform::AppleTouch);
        assert_eq!(Platform::from_user_agent(""), Platform::Standard);
        assert_eq!(Platform::from_user_agent("Macintosh"), Platform::Standard);
    }

    #[test]
    fn only_apple_touch_emulates_long_press() {
        assert!(Platform::Standard.long_press().is_none());
        assert_eq!(
            Platform::AppleTouch.long_press(),
            Some(LongPressConfig::default())
        );
    }
}
