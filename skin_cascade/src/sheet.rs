// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet fragments.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::context::StyleContext;
use crate::icon::IconUnit;
use crate::style::StyleUnit;
use crate::variant::{SheetVariants, Specificity};

/// A content-derived identity for a sheet fragment.
///
/// Ids are computed from the fragment's variants, styles, and icons with an
/// unseeded hash function, so the same fragment gets the same id in every run
/// of the same build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SheetId(pub u64);

impl SheetId {
    /// Returns the raw id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct SheetData {
    id: SheetId,
    variants: SheetVariants,
    styles: Vec<StyleUnit>,
    icons: Vec<IconUnit>,
}

/// A bounded collection of style and icon units plus the conditions under
/// which it applies.
///
/// Fragments are immutable and cheap to clone (`Arc`).
///
/// # Example
///
/// ```rust
/// use skin_cascade::{Direction, SheetFragment, SheetVariants, StyleContext, StyleUnitBuilder};
///
/// let sheet = SheetFragment::builder()
///     .variants(SheetVariants::new().direction(Direction::Rtl))
///     .style(StyleUnitBuilder::selector(".AFStartPadding").property("padding-right", "4px").build())
///     .build();
///
/// assert_eq!(sheet.styles().len(), 1);
/// assert!(sheet.match_score(&StyleContext::new()).is_none());
/// assert_eq!(sheet.id(), sheet.clone().id());
/// ```
#[derive(Clone, Debug)]
pub struct SheetFragment {
    inner: Arc<SheetData>,
}

impl SheetFragment {
    /// Returns a builder for an unconstrained, empty fragment.
    #[must_use]
    pub fn builder() -> SheetFragmentBuilder {
        SheetFragmentBuilder::default()
    }

    /// Returns the fragment id.
    #[must_use]
    #[inline]
    pub fn id(&self) -> SheetId {
        self.inner.id
    }

    /// Returns the applicability conditions.
    #[must_use]
    pub fn variants(&self) -> &SheetVariants {
        &self.inner.variants
    }

    /// Returns the style units in declaration order.
    #[must_use]
    pub fn styles(&self) -> &[StyleUnit] {
        &self.inner.styles
    }

    /// Returns the icon units in declaration order.
    #[must_use]
    pub fn icons(&self) -> &[IconUnit] {
        &self.inner.icons
    }

    /// Scores this fragment against `context`; `None` means it does not apply.
    #[must_use]
    pub fn match_score(&self, context: &StyleContext) -> Option<Specificity> {
        self.inner.variants.match_score(context)
    }
}

/// Builder for [`SheetFragment`].
#[derive(Debug, Default)]
pub struct SheetFragmentBuilder {
    id: Option<SheetId>,
    variants: SheetVariants,
    styles: Vec<StyleUnit>,
    icons: Vec<IconUnit>,
}

impl SheetFragmentBuilder {
    /// Sets the applicability conditions.
    #[must_use]
    pub fn variants(mut self, variants: SheetVariants) -> Self {
        self.variants = variants;
        self
    }

    /// Appends a style unit.
    #[must_use]
    pub fn style(mut self, style: StyleUnit) -> Self {
        self.styles.push(style);
        self
    }

    /// Appends an icon unit.
    #[must_use]
    pub fn icon(mut self, icon: IconUnit) -> Self {
        self.icons.push(icon);
        self
    }

    /// Uses a caller-supplied id instead of the content-derived one.
    #[must_use]
    pub fn id(mut self, id: SheetId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builds the fragment.
    #[must_use]
    pub fn build(self) -> SheetFragment {
        let id = self.id.unwrap_or_else(|| {
            let mut hasher = FxHasher::default();
            self.variants.hash(&mut hasher);
            self.styles.hash(&mut hasher);
            self.icons.hash(&mut hasher);
            SheetId(hasher.finish())
        });
        SheetFragment {
            inner: Arc::new(SheetData {
                id,
                variants: self.variants,
                styles: self.styles,
                icons: self.icons,
            }),
        }
    }
}
