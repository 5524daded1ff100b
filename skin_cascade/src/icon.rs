// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon units and icon extraction from resolved styles.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use log::warn;
use skin_property::{
    PropertyRecord, has_mismatched_quotes, is_absolute_uri, parse_pixel_integer, trim_quotes,
    url_value,
};

use crate::options::ResolveOptions;
use crate::resolved::ResolvedStyle;
use crate::style::StyleUnit;

const CONTENT: &str = "content";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";

/// An icon name bound to the style describing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconUnit {
    name: Arc<str>,
    style: StyleUnit,
}

impl IconUnit {
    /// Binds `name` to `style`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, style: StyleUnit) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    /// Returns the icon name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the backing style unit.
    #[must_use]
    pub fn style(&self) -> &StyleUnit {
        &self.style
    }
}

/// Leftover properties of an icon style, applied inline when the icon renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InlineStyle {
    properties: Box<[PropertyRecord]>,
}

impl InlineStyle {
    /// Returns the properties in order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    /// Returns the value of `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|record| record.is_named(name))
            .map(PropertyRecord::value)
    }

    /// Returns `true` if there are no inline properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// An image icon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageIcon {
    uri: Arc<str>,
    width: Option<u32>,
    height: Option<u32>,
    inline_style: InlineStyle,
}

impl ImageIcon {
    /// Returns the image URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the width in pixels, if it was a pixel integer.
    #[must_use]
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Returns the height in pixels, if it was a pixel integer.
    #[must_use]
    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Returns the remaining inline style.
    #[must_use]
    pub fn inline_style(&self) -> &InlineStyle {
        &self.inline_style
    }
}

/// A text icon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextIcon {
    text: Arc<str>,
    inline_style: InlineStyle,
}

impl TextIcon {
    /// Returns the text with surrounding quotes removed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the inline style, including any pixel width and height.
    #[must_use]
    pub fn inline_style(&self) -> &InlineStyle {
        &self.inline_style
    }
}

/// The kind of icon a resolved style describes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    /// An image at a root-relative (`/...`) or absolute URI.
    Image(ImageIcon),
    /// An image at a URI relative to the application context.
    ContextImage(ImageIcon),
    /// Literal text.
    Text(TextIcon),
    /// An explicitly inhibited icon; nothing renders.
    Null,
}

impl Icon {
    /// Classifies a resolved style as an icon.
    ///
    /// Returns `None` if the style has no `content` property.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skin_cascade::{
    ///     Icon, ResolveOptions, SheetFragment, StyleContext, StyleSheetDocument, StyleUnitBuilder,
    /// };
    ///
    /// let document = StyleSheetDocument::builder()
    ///     .sheet(
    ///         SheetFragment::builder()
    ///             .style(
    ///                 StyleUnitBuilder::selector(".AFBusy:alias")
    ///                     .property("content", "url(busy.gif)")
    ///                     .property("width", "16px")
    ///                     .build(),
    ///             )
    ///             .build(),
    ///     )
    ///     .build();
    /// let style = document
    ///     .resolve_by_selector(&StyleContext::new(), ".AFBusy:alias")
    ///     .unwrap();
    ///
    /// let Some(Icon::ContextImage(image)) = Icon::from_style(&style, &ResolveOptions::default())
    /// else {
    ///     panic!("expected a context image");
    /// };
    /// assert_eq!(image.uri(), "busy.gif");
    /// assert_eq!(image.width(), Some(16));
    /// ```
    #[must_use]
    pub fn from_style(style: &ResolvedStyle, options: &ResolveOptions) -> Option<Self> {
        enum Content<'a> {
            Uri(&'a str),
            Text(&'a str),
            Inhibited,
        }

        let mut content = None;
        let mut width: Option<(u32, &PropertyRecord)> = None;
        let mut height: Option<(u32, &PropertyRecord)> = None;
        let mut inline = Vec::new();

        for record in style.properties() {
            let value = record.value();
            match record.name() {
                WIDTH | HEIGHT => match parse_pixel_integer(value) {
                    Some(pixels) if record.is_named(WIDTH) => width = Some((pixels, record)),
                    Some(pixels) => height = Some((pixels, record)),
                    None => put(&mut inline, record.clone()),
                },
                CONTENT => {
                    content = Some(if let Some(uri) = url_value(value) {
                        Content::Uri(uri)
                    } else if value.starts_with(options.inhibit_marker()) {
                        Content::Inhibited
                    } else {
                        if has_mismatched_quotes(value) {
                            warn!("{}: mismatched quotes in icon text {value}", style.key());
                        }
                        Content::Text(trim_quotes(value))
                    });
                }
                _ => put(&mut inline, record.clone()),
            }
        }

        Some(match content? {
            Content::Inhibited => Self::Null,
            Content::Text(text) => {
                if let Some((_, record)) = height {
                    put(&mut inline, record.clone());
                }
                if let Some((_, record)) = width {
                    put(&mut inline, record.clone());
                }
                Self::Text(TextIcon {
                    text: text.into(),
                    inline_style: InlineStyle {
                        properties: inline.into_boxed_slice(),
                    },
                })
            }
            Content::Uri(uri) => {
                let image = ImageIcon {
                    uri: uri.into(),
                    width: width.map(|(pixels, _)| pixels),
                    height: height.map(|(pixels, _)| pixels),
                    inline_style: InlineStyle {
                        properties: inline.into_boxed_slice(),
                    },
                };
                if uri.starts_with('/') || is_absolute_uri(uri) {
                    Self::Image(image)
                } else {
                    Self::ContextImage(image)
                }
            }
        })
    }

    /// Returns `true` for [`Icon::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the inline style, if this icon renders anything.
    #[must_use]
    pub fn inline_style(&self) -> Option<&InlineStyle> {
        match self {
            Self::Image(image) | Self::ContextImage(image) => Some(image.inline_style()),
            Self::Text(text) => Some(text.inline_style()),
            Self::Null => None,
        }
    }
}

/// One resolved icon: its name, its classification, and the style it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconEntry {
    name: Arc<str>,
    icon: Icon,
    style: ResolvedStyle,
}

impl IconEntry {
    pub(crate) fn new(name: Arc<str>, icon: Icon, style: ResolvedStyle) -> Self {
        Self { name, icon, style }
    }

    /// Returns the icon name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the icon.
    #[must_use]
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Returns the resolved style backing the icon.
    #[must_use]
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }
}

/// Every icon resolved for one context, in declaration order.
///
/// The collection is finite and may be iterated any number of times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedIcons {
    entries: Vec<IconEntry>,
}

impl ResolvedIcons {
    pub(crate) fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, IconEntry> {
        self.entries.iter()
    }

    /// Returns the entry for the icon `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Returns the number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no icons were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedIcons {
    type Item = &'a IconEntry;
    type IntoIter = core::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ResolvedIcons {
    type Item = IconEntry;
    type IntoIter = alloc::vec::IntoIter<IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn put(records: &mut Vec<PropertyRecord>, record: PropertyRecord) {
    match records.iter_mut().find(|r| r.same_property(&record)) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}
