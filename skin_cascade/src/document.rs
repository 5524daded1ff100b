// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style sheet document: every fragment of a skin plus resolution options.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::context::StyleContext;
use crate::icon::ResolvedIcons;
use crate::options::ResolveOptions;
use crate::resolve::{ResolveSession, applicable};
use crate::resolved::ResolvedStyle;
use crate::sheet::SheetFragment;

/// Timestamp of a document whose sources have no known modification time.
pub const UNKNOWN_TIMESTAMP: i64 = -1;

#[derive(Debug)]
struct DocumentData {
    sheets: Vec<SheetFragment>,
    version: Option<Arc<str>>,
    timestamp: i64,
    options: ResolveOptions,
}

/// All sheet fragments of a skin, in declaration order.
///
/// Documents are immutable, cheap to clone (`Arc`), and safe to query from
/// many threads at once. Each query builds its own [`ResolveSession`]; use
/// [`session`](Self::session) directly to reuse caches across several queries
/// against the same context.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{
///     Direction, SheetFragment, SheetVariants, StyleContext, StyleSheetDocument, StyleUnitBuilder,
/// };
///
/// let document = StyleSheetDocument::builder()
///     .sheet(
///         SheetFragment::builder()
///             .style(StyleUnitBuilder::selector(".x").property("padding-left", "4px").build())
///             .build(),
///     )
///     .sheet(
///         SheetFragment::builder()
///             .variants(SheetVariants::new().direction(Direction::Rtl))
///             .style(
///                 StyleUnitBuilder::selector(".x")
///                     .reset_properties()
///                     .property("padding-right", "4px")
///                     .build(),
///             )
///             .build(),
///     )
///     .version("1.2")
///     .build();
///
/// let ltr = StyleContext::new();
/// let rtl = StyleContext::new().with_direction(Direction::Rtl);
///
/// let style = document.resolve_by_selector(&ltr, ".x").unwrap();
/// assert_eq!(style.property("padding-left"), Some("4px"));
///
/// let style = document.resolve_by_selector(&rtl, ".x").unwrap();
/// assert_eq!(style.property("padding-left"), None);
/// assert_eq!(style.property("padding-right"), Some("4px"));
///
/// assert_ne!(document.document_id(&ltr), document.document_id(&rtl));
/// ```
#[derive(Clone, Debug)]
pub struct StyleSheetDocument {
    inner: Arc<DocumentData>,
}

impl StyleSheetDocument {
    /// Returns a builder for an empty document.
    #[must_use]
    pub fn builder() -> StyleSheetDocumentBuilder {
        StyleSheetDocumentBuilder {
            data: DocumentData {
                sheets: Vec::new(),
                version: None,
                timestamp: UNKNOWN_TIMESTAMP,
                options: ResolveOptions::default(),
            },
        }
    }

    /// Returns every fragment in declaration order.
    #[must_use]
    pub fn sheets(&self) -> &[SheetFragment] {
        &self.inner.sheets
    }

    /// Returns the document version, if set.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.inner.version.as_deref()
    }

    /// Returns the modification time of the document sources, or
    /// [`UNKNOWN_TIMESTAMP`].
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.inner.timestamp
    }

    /// Returns the resolution options.
    #[must_use]
    pub fn options(&self) -> &ResolveOptions {
        &self.inner.options
    }

    /// Returns the fragments applicable to `context`, lowest precedence first.
    #[must_use]
    pub fn applicable_sheets(&self, context: &StyleContext) -> Vec<&SheetFragment> {
        applicable(&self.inner.sheets, context)
    }

    /// Returns an identifier for the applicable fragment set, in base 36.
    ///
    /// The id is stable for a fixed context and fragment set and changes
    /// whenever an applicable fragment does, which makes it usable in
    /// generated file names.
    #[must_use]
    pub fn document_id(&self, context: &StyleContext) -> String {
        let id = self
            .applicable_sheets(context)
            .iter()
            .fold(17_u64, |acc, sheet| {
                acc.wrapping_mul(37).wrapping_add(sheet.id().get())
            });
        to_base36(id)
    }

    /// Starts a resolution session for `context`.
    #[must_use]
    pub fn session(&self, context: &StyleContext) -> ResolveSession<'_> {
        ResolveSession::new(&self.inner.sheets, context, &self.inner.options)
    }

    /// Resolves the style with the given selector.
    #[must_use]
    pub fn resolve_by_selector(&self, context: &StyleContext, selector: &str) -> Option<ResolvedStyle> {
        self.session(context).style_by_selector(selector)
    }

    /// Resolves the style with the given name.
    #[must_use]
    pub fn resolve_by_name(&self, context: &StyleContext, name: &str) -> Option<ResolvedStyle> {
        self.session(context).style_by_name(name)
    }

    /// Resolves every style of the applicable fragments, in declaration order.
    #[must_use]
    pub fn resolve_styles(&self, context: &StyleContext) -> Vec<ResolvedStyle> {
        self.session(context).styles()
    }

    /// Resolves every icon of the applicable fragments, one per icon name.
    #[must_use]
    pub fn resolve_icons(&self, context: &StyleContext) -> ResolvedIcons {
        self.session(context).icons()
    }
}

/// Builder for [`StyleSheetDocument`].
#[derive(Debug)]
pub struct StyleSheetDocumentBuilder {
    data: DocumentData,
}

impl StyleSheetDocumentBuilder {
    /// Appends a fragment; later fragments win specificity ties.
    #[must_use]
    pub fn sheet(mut self, sheet: SheetFragment) -> Self {
        self.data.sheets.push(sheet);
        self
    }

    /// Appends several fragments.
    #[must_use]
    pub fn sheets(mut self, sheets: impl IntoIterator<Item = SheetFragment>) -> Self {
        self.data.sheets.extend(sheets);
        self
    }

    /// Sets the version identifier.
    #[must_use]
    pub fn version(mut self, version: impl Into<Arc<str>>) -> Self {
        self.data.version = Some(version.into());
        self
    }

    /// Sets the modification time of the document sources.
    #[must_use]
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.data.timestamp = timestamp;
        self
    }

    /// Sets the resolution options.
    #[must_use]
    pub fn options(mut self, options: ResolveOptions) -> Self {
        self.data.options = options;
        self
    }

    /// Builds the document.
    #[must_use]
    pub fn build(self) -> StyleSheetDocument {
        StyleSheetDocument {
            inner: Arc::new(self.data),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "remainder is always below 36"
)]
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut digits = Vec::new();
    loop {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}
