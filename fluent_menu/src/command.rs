// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fluent_host::{Capabilities, HostServices, ShareData};
use fluent_touch::TouchHost;

use crate::target::MenuTarget;

/// Navigation and resource side effects a menu command can request.
///
/// Clipboard and share requests go through [`HostServices`]; the listener
/// seam of [`TouchHost`] lets a disabled menu release the touch registry.
pub trait MenuHost: HostServices + TouchHost {
    /// Open `url` in a new tab and focus it.
    fn open_url(&mut self, url: &str);

    /// Download the resource at `url`.
    fn download(&mut self, url: &str);

    /// Fetch the image at `src` and place it on the clipboard.
    fn copy_image(&mut self, src: &str) {
        let _ = src;
    }

    /// Copy `text` without the clipboard API, by selecting it in a temporary
    /// node and running the copy command.
    fn copy_text_fallback(&mut self, text: &str);
}

/// A context-menu command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Open the link in a new tab.
    OpenLinkInNewTab,
    /// Copy the link address.
    CopyLinkAddress,
    /// Copy the link's text.
    CopyLinkText,
    /// Download the link target.
    DownloadLink,
    /// Share the link.
    ShareLink,
    /// Open the image in a new tab.
    OpenImageInNewTab,
    /// Copy the image source address.
    CopyImageAddress,
    /// Copy the image itself.
    CopyImage,
    /// Download the image.
    DownloadImage,
    /// Share the image.
    ShareImage,
}

impl Command {
    /// The row label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenLinkInNewTab => "Open link in new tab",
            Self::CopyLinkAddress => "Copy link address",
            Self::CopyLinkText => "Copy link text",
            Self::DownloadLink => "Download link file",
            Self::ShareLink => "Share link",
            Self::OpenImageInNewTab => "Open image in new tab",
            Self::CopyImageAddress => "Copy image address",
            Self::CopyImage => "Copy image",
            Self::DownloadImage => "Download image",
            Self::ShareImage => "Share image",
        }
    }

    /// Name of the row icon in the Material Symbols set.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::OpenLinkInNewTab => "add_box",
            Self::CopyLinkAddress => "link",
            Self::CopyLinkText => "format_size",
            Self::DownloadLink => "download",
            Self::ShareLink => "share",
            Self::OpenImageInNewTab => "add_photo_alternate",
            Self::CopyImageAddress => "media_link",
            Self::CopyImage => "photo_library",
            Self::DownloadImage => "system_update_alt",
            Self::ShareImage => "ios_share",
        }
    }

    /// The target field the command acts on.
    fn input(self, target: &MenuTarget) -> Option<&str> {
        match self {
            Self::OpenLinkInNewTab | Self::CopyLinkAddress | Self::DownloadLink | Self::ShareLink => {
                target.href.as_deref()
            }
            Self::CopyLinkText => target.text.as_deref(),
            Self::OpenImageInNewTab
            | Self::CopyImageAddress
            | Self::CopyImage
            | Self::DownloadImage
            | Self::ShareImage => target.src.as_deref(),
        }
    }

    /// Runs the command against `target`.
    ///
    /// Returns `false` when the target lacks what the command needs or the
    /// host lacks the capability; nothing is requested in that case.
    pub fn execute<H: MenuHost + ?Sized>(self, target: &MenuTarget, host: &mut H) -> bool {
        let Some(input) = self.input(target) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(command = self.label(), "menu command");
        match self {
            Self::OpenLinkInNewTab | Self::OpenImageInNewTab => host.open_url(input),
            Self::CopyLinkAddress | Self::CopyLinkText | Self::CopyImageAddress => {
                copy(host, input);
            }
            Self::DownloadLink | Self::DownloadImage => host.download(input),
            Self::CopyImage => {
                if !host.capabilities().contains(Capabilities::CLIPBOARD_WRITE) {
                    return false;
                }
                host.copy_image(input);
            }
            Self::ShareLink | Self::ShareImage => {
                let title = if self == Self::ShareLink {
                    target.text.as_deref().or(target.alt.as_deref())
                } else {
                    target.alt.as_deref()
                };
                let data = ShareData {
                    title,
                    text: Some(input),
                    url: Some(input),
                };
                return fluent_host::share(host, &data);
            }
        }
        true
    }
}

fn copy<H: MenuHost + ?Sized>(host: &mut H, text: &str) {
    if host.capabilities().contains(Capabilities::CLIPBOARD_WRITE) {
        host.write_clipboard_text(text);
    } else {
        host.copy_text_fallback(text);
    }
}
