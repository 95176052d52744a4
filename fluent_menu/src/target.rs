// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// What a long press landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A hyperlink.
    Link,
    /// A standalone image.
    Image,
    /// An image that is the direct child of a hyperlink.
    LinkedImage,
}

impl TargetKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 3] = [Self::Link, Self::Image, Self::LinkedImage];

    /// Classifies an element by its tag name and its parent's tag name.
    ///
    /// Tag names are compared without regard to ASCII case.
    ///
    /// ```
    /// use fluent_menu::TargetKind;
    ///
    /// assert_eq!(TargetKind::classify("A", None), Some(TargetKind::Link));
    /// assert_eq!(TargetKind::classify("img", Some("a")), Some(TargetKind::LinkedImage));
    /// assert_eq!(TargetKind::classify("img", Some("figure")), Some(TargetKind::Image));
    /// assert_eq!(TargetKind::classify("p", Some("a")), None);
    /// ```
    pub fn classify(tag: &str, parent_tag: Option<&str>) -> Option<Self> {
        if tag.eq_ignore_ascii_case("a") {
            Some(Self::Link)
        } else if tag.eq_ignore_ascii_case("img") {
            if parent_tag.is_some_and(|parent| parent.eq_ignore_ascii_case("a")) {
                Some(Self::LinkedImage)
            } else {
                Some(Self::Image)
            }
        } else {
            None
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Link => 0,
            Self::Image => 1,
            Self::LinkedImage => 2,
        }
    }
}

/// The element a menu was opened on, reduced to what commands need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTarget {
    /// Kind of the element.
    pub kind: TargetKind,
    /// Link address (the element's or its parent anchor's).
    pub href: Option<String>,
    /// Image source.
    pub src: Option<String>,
    /// Text content.
    pub text: Option<String>,
    /// Image alternative text.
    pub alt: Option<String>,
}

impl MenuTarget {
    /// A hyperlink.
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Link,
            href: Some(href.into()),
            src: None,
            text: Some(text.into()),
            alt: None,
        }
    }

    /// A standalone image.
    pub fn image(src: impl Into<String>, alt: Option<String>) -> Self {
        Self {
            kind: TargetKind::Image,
            href: None,
            src: Some(src.into()),
            text: None,
            alt,
        }
    }

    /// An image inside a hyperlink.
    pub fn linked_image(
        href: impl Into<String>,
        src: impl Into<String>,
        alt: Option<String>,
    ) -> Self {
        Self {
            kind: TargetKind::LinkedImage,
            href: Some(href.into()),
            src: Some(src.into()),
            text: None,
            alt,
        }
    }
}
