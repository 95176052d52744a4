// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional platform services and the guards around them.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// The optional services a host can provide.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// An asynchronous clipboard text writer is available.
        const CLIPBOARD_WRITE = 1 << 0;
        /// A vibration motor is available.
        const VIBRATE = 1 << 1;
        /// A native share sheet is available.
        const SHARE = 1 << 2;
    }
}

/// A haptic feedback request.
///
/// Durations are in milliseconds. A pattern alternates vibration and pause
/// durations, starting with a vibration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Vibration {
    /// A single vibration.
    Pulse(u32),
    /// Alternating vibrate/pause durations.
    Pattern(SmallVec<[u32; 4]>),
}

impl Vibration {
    /// A single vibration of `millis` milliseconds.
    #[must_use]
    pub const fn pulse(millis: u32) -> Self {
        Self::Pulse(millis)
    }

    /// A vibrate/pause pattern.
    #[must_use]
    pub fn pattern(steps: &[u32]) -> Self {
        Self::Pattern(SmallVec::from_slice(steps))
    }

    /// Total duration of the request in milliseconds, pauses included.
    #[must_use]
    pub fn total_millis(&self) -> u32 {
        match self {
            Self::Pulse(millis) => *millis,
            Self::Pattern(steps) => steps.iter().copied().fold(0_u32, u32::saturating_add),
        }
    }
}

/// Content handed to the platform share sheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareData<'a> {
    /// Title of the shared item.
    pub title: Option<&'a str>,
    /// Free-form text.
    pub text: Option<&'a str>,
    /// URL of the shared item.
    pub url: Option<&'a str>,
}

/// How [`copy_text`] delivered the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    /// Written through the asynchronous clipboard API.
    Clipboard,
    /// Copied by the synchronous copy command acting on the live selection.
    ExecCommand,
}

/// Platform services consumed by the gesture engines.
///
/// All methods have no-op defaults so hosts only implement what they support.
/// Callers go through [`vibrate`], [`copy_text`] and [`share`], which consult
/// [`HostServices::capabilities`] first.
pub trait HostServices {
    /// The services this host actually provides.
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// Vibrate the device.
    fn vibrate(&mut self, vibration: &Vibration) {
        let _ = vibration;
    }

    /// Write `text` through the asynchronous clipboard API.
    ///
    /// Failures are not reported back; the write is fire-and-forget.
    fn write_clipboard_text(&mut self, text: &str) {
        let _ = text;
    }

    /// Run the synchronous copy command against the current selection.
    fn exec_copy(&mut self) {}

    /// Open the share sheet.
    fn share(&mut self, data: &ShareData<'_>) {
        let _ = data;
    }
}

/// Vibrate if the host has a vibration motor. Returns whether it was requested.
pub fn vibrate<S: HostServices + ?Sized>(services: &mut S, vibration: Vibration) -> bool {
    if !services.capabilities().contains(Capabilities::VIBRATE) {
        return false;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(?vibration, "vibrate");
    services.vibrate(&vibration);
    true
}

/// Copy `text`, preferring the clipboard API and falling back to the copy command.
///
/// The fallback copies whatever the host currently has selected, so callers
/// should make sure the selection holds `text` before calling this.
pub fn copy_text<S: HostServices + ?Sized>(services: &mut S, text: &str) -> CopyMethod {
    if services.capabilities().contains(Capabilities::CLIPBOARD_WRITE) {
        services.write_clipboard_text(text);
        CopyMethod::Clipboard
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!("clipboard write unavailable, using copy command");
        services.exec_copy();
        CopyMethod::ExecCommand
    }
}

/// Open the share sheet if the host has one. Returns whether it was requested.
pub fn share<S: HostServices + ?Sized>(services: &mut S, data: &ShareData<'_>) -> bool {
    if !services.capabilities().contains(Capabilities::SHARE) {
        return false;
    }
    services.share(data);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        caps: Option<Capabilities>,
        vibrations: usize,
        writes: usize,
        exec: usize,
        shares: usize,
    }

    impl HostServices for Counting {
        fn capabilities(&self) -> Capabilities {
            self.caps.unwrap_or(Capabilities::empty())
        }

        fn vibrate(&mut self, _: &Vibration) {
            self.vibrations += 1;
        }

        fn write_clipboard_text(&mut self, _: &str) {
            self.writes += 1;
        }

        fn exec_copy(&mut self) {
            self.exec += 1;
        }

        fn share(&mut self, _: &ShareData<'_>) {
            self.shares += 1;
        }
    }

    #[test]
    fn missing_capabilities_degrade_silently() {
        let mut host = Counting::default();
        assert!(!vibrate(&mut host, Vibration::pulse(1)));
        assert!(!share(&mut host, &ShareData::default()));
        assert_eq!(copy_text(&mut host, "x"), CopyMethod::ExecCommand);
        assert_eq!(host.vibrations, 0);
        assert_eq!(host.shares, 0);
        assert_eq!(host.writes, 0);
        assert_eq!(host.exec, 1);
    }

    #[test]
    fn present_capabilities_are_used() {
        let mut host = Counting {
            caps: Some(Capabilities::all()),
            ..Counting::default()
        };
        assert!(vibrate(&mut host, Vibration::pattern(&[50, 0, 50])));
        assert!(share(&mut host, &ShareData::default()));
        assert_eq!(copy_text(&mut host, "x"), CopyMethod::Clipboard);
        assert_eq!(host.vibrations, 1);
        assert_eq!(host.shares, 1);
        assert_eq!(host.writes, 1);
        assert_eq!(host.exec, 0);
    }

    #[test]
    fn pattern_duration_includes_pauses() {
        assert_eq!(Vibration::pattern(&[50, 10, 50]).total_millis(), 110);
        assert_eq!(Vibration::pulse(5).total_millis(), 5);
    }
}
