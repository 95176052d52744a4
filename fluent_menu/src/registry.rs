// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use crate::command::Command;
use crate::target::TargetKind;

/// One row of a menu body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    /// A selectable command.
    Command(Command),
    /// A separator line.
    Divider,
}

impl MenuEntry {
    /// The command of this row, if it has one.
    pub fn command(self) -> Option<Command> {
        match self {
            Self::Command(command) => Some(command),
            Self::Divider => None,
        }
    }
}

/// Ordered menu rows for every [`TargetKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRegistry {
    entries: [Vec<MenuEntry>; 3],
}

impl Default for MenuRegistry {
    fn default() -> Self {
        use MenuEntry::Divider;

        let c = MenuEntry::Command;
        Self {
            entries: [
                vec![
                    c(Command::OpenLinkInNewTab),
                    Divider,
                    c(Command::CopyLinkAddress),
                    c(Command::CopyLinkText),
                    c(Command::DownloadLink),
                    Divider,
                    c(Command::ShareLink),
                ],
                vec![
                    c(Command::OpenImageInNewTab),
                    Divider,
                    c(Command::CopyImageAddress),
                    c(Command::CopyImage),
                    c(Command::DownloadImage),
                    Divider,
                    c(Command::ShareImage),
                ],
                vec![
                    c(Command::OpenLinkInNewTab),
                    c(Command::OpenImageInNewTab),
                    Divider,
                    c(Command::CopyLinkAddress),
                    c(Command::CopyImageAddress),
                    c(Command::CopyImage),
                    c(Command::DownloadLink),
                    c(Command::DownloadImage),
                    Divider,
                    c(Command::ShareLink),
                    c(Command::ShareImage),
                ],
            ],
        }
    }
}

impl MenuRegistry {
    /// A registry with no rows for any kind.
    pub fn empty() -> Self {
        Self {
            entries: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// The rows shown for `kind`.
    pub fn entries(&self, kind: TargetKind) -> &[MenuEntry] {
        &self.entries[kind.index()]
    }

    /// Replaces the rows shown for `kind`.
    #[must_use]
    pub fn with_entries(mut self, kind: TargetKind, entries: Vec<MenuEntry>) -> Self {
        self.entries[kind.index()] = entries;
        self
    }

    /// Every command offered for `kind`, in row order.
    pub fn commands(&self, kind: TargetKind) -> impl Iterator<Item = Command> + '_ {
        self.entries(kind).iter().filter_map(|entry| entry.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_images_offer_both_families() {
        let registry = MenuRegistry::default();
        let commands: Vec<_> = registry.commands(TargetKind::LinkedImage).collect();
        assert_eq!(commands.len(), 9);
        assert!(commands.contains(&Command::ShareLink));
        assert!(commands.contains(&Command::ShareImage));
        assert!(!commands.contains(&Command::CopyLinkText));
    }

    #[test]
    fn entries_can_be_replaced_per_kind() {
        let registry = MenuRegistry::default()
            .with_entries(TargetKind::Image, vec![MenuEntry::Command(Command::CopyImage)]);
        assert_eq!(
            registry.entries(TargetKind::Image),
            [MenuEntry::Command(Command::CopyImage)]
        );
        assert_eq!(registry.entries(TargetKind::Link).len(), 7);
        assert!(MenuRegistry::empty().entries(TargetKind::Link).is_empty());
    }
}
