// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade resolution.
//!
//! A [`ResolveSession`] is bound to one query context: it selects and orders
//! the applicable sheet fragments once, then resolves any number of styles
//! against them, caching every result. Includes are expanded recursively.
//! Separate in-progress stacks for selectors and names catch include cycles
//! at any depth.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use log::{debug, trace, warn};
use skin_property::PropertyRecord;
use smallvec::SmallVec;

use crate::accumulate::StyleAccumulator;
use crate::context::StyleContext;
use crate::icon::{Icon, IconEntry, ResolvedIcons};
use crate::key::{IdKind, StyleKey};
use crate::options::ResolveOptions;
use crate::resolved::ResolvedStyle;
use crate::sheet::SheetFragment;
use crate::style::{EmbeddedSegment, IncludeProperty, StyleUnit};

/// Why a style could not be resolved.
///
/// These never escape the public query methods as failures: an include that
/// fails to resolve simply contributes nothing. [`ResolveSession::try_style`]
/// exposes them for diagnostics.
#[derive(Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No applicable style unit has this key.
    NotFound(StyleKey),
    /// Matching units exist but merge to no properties at all.
    Empty(StyleKey),
    /// The key is already being resolved further up the include chain.
    CircularInclude(StyleKey),
}

impl ResolveError {
    /// Returns the key that failed to resolve.
    #[must_use]
    pub fn key(&self) -> &StyleKey {
        match self {
            Self::NotFound(key) | Self::Empty(key) | Self::CircularInclude(key) => key,
        }
    }
}

impl fmt::Debug for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "NotFound({key})"),
            Self::Empty(key) => write!(f, "Empty({key})"),
            Self::CircularInclude(key) => write!(f, "CircularInclude({key})"),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "no applicable style for {key}"),
            Self::Empty(key) => write!(f, "style {key} has no properties"),
            Self::CircularInclude(key) => write!(f, "circular dependency detected in style {key}"),
        }
    }
}

impl core::error::Error for ResolveError {}

/// Returns the fragments that apply to `context`, lowest precedence first.
///
/// Ties in specificity keep declaration order.
pub(crate) fn applicable<'a>(
    fragments: &'a [SheetFragment],
    context: &StyleContext,
) -> Vec<&'a SheetFragment> {
    let mut scored: Vec<_> = fragments
        .iter()
        .filter_map(|sheet| sheet.match_score(context).map(|score| (score, sheet)))
        .collect();
    scored.sort_by_key(|(score, _)| *score);
    trace!(
        "{} of {} sheet fragments apply to {context:?}",
        scored.len(),
        fragments.len()
    );
    scored.into_iter().map(|(_, sheet)| sheet).collect()
}

type Units<'a> = SmallVec<[&'a StyleUnit; 4]>;

/// Style and icon units by key, in precedence order.
#[derive(Debug, Default)]
struct UnitIndex<'a> {
    styles: HashMap<&'a StyleKey, Units<'a>>,
    icons: HashMap<&'a StyleKey, Units<'a>>,
}

impl<'a> UnitIndex<'a> {
    fn new(sheets: &[&'a SheetFragment]) -> Self {
        let mut index = Self::default();
        for &sheet in sheets {
            for unit in sheet.styles() {
                index.styles.entry(unit.key()).or_default().push(unit);
            }
            for icon in sheet.icons() {
                let unit = icon.style();
                index.icons.entry(unit.key()).or_default().push(unit);
            }
        }
        index
    }

    /// Returns the units for `key`: styles first, then icon styles if asked.
    fn units(&self, key: &StyleKey, for_icons: bool) -> Units<'a> {
        let styles = self.styles.get(key).into_iter().flatten();
        let icons = self
            .icons
            .get(key)
            .filter(|_| for_icons)
            .into_iter()
            .flatten();
        styles.chain(icons).copied().collect()
    }
}

type Resolution = Result<ResolvedStyle, ResolveError>;

/// In-progress keys, one stack per identity kind.
#[derive(Debug, Default)]
struct IncludeStacks {
    selectors: Vec<StyleKey>,
    names: Vec<StyleKey>,
}

impl IncludeStacks {
    fn stack(&mut self, kind: IdKind) -> &mut Vec<StyleKey> {
        match kind {
            IdKind::Selector => &mut self.selectors,
            IdKind::Name => &mut self.names,
        }
    }
}

/// A resolution session for one query context.
///
/// Sessions own their caches and include stacks, so concurrent callers each
/// use their own session while sharing the underlying sheet fragments.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{SheetFragment, StyleContext, StyleKey, StyleSheetDocument, StyleUnitBuilder};
///
/// let document = StyleSheetDocument::builder()
///     .sheet(
///         SheetFragment::builder()
///             .style(StyleUnitBuilder::named("DefaultFont").property("font-size", "10pt").build())
///             .style(
///                 StyleUnitBuilder::selector(".AFLabel")
///                     .include_style(StyleKey::name("DefaultFont"))
///                     .property("font-size", "+2pt")
///                     .build(),
///             )
///             .build(),
///     )
///     .build();
///
/// let mut session = document.session(&StyleContext::new());
/// let label = session.style_by_selector(".AFLabel").unwrap();
/// assert_eq!(label.property("font-size"), Some("12pt"));
/// assert_eq!(session.style_by_name("DefaultFont").unwrap().property("font-size"), Some("10pt"));
/// ```
#[derive(Debug)]
pub struct ResolveSession<'a> {
    sheets: Vec<&'a SheetFragment>,
    index: UnitIndex<'a>,
    options: &'a ResolveOptions,
    styles: HashMap<StyleKey, Resolution>,
    icon_styles: HashMap<StyleKey, Resolution>,
    stacks: IncludeStacks,
}

impl<'a> ResolveSession<'a> {
    pub(crate) fn new(
        fragments: &'a [SheetFragment],
        context: &StyleContext,
        options: &'a ResolveOptions,
    ) -> Self {
        let sheets = applicable(fragments, context);
        let index = UnitIndex::new(&sheets);
        Self {
            sheets,
            index,
            options,
            styles: HashMap::new(),
            icon_styles: HashMap::new(),
            stacks: IncludeStacks::default(),
        }
    }

    /// Returns the applicable fragments, lowest precedence first.
    #[must_use]
    pub fn sheets(&self) -> &[&'a SheetFragment] {
        &self.sheets
    }

    /// Resolves the style with the given selector and no client rule.
    pub fn style_by_selector(&mut self, selector: &str) -> Option<ResolvedStyle> {
        self.style(&StyleKey::selector(selector))
    }

    /// Resolves the style with the given name and no client rule.
    pub fn style_by_name(&mut self, name: &str) -> Option<ResolvedStyle> {
        self.style(&StyleKey::name(name))
    }

    /// Resolves the style with the given key.
    pub fn style(&mut self, key: &StyleKey) -> Option<ResolvedStyle> {
        self.try_style(key).ok()
    }

    /// Resolves the style with the given key, reporting why it is absent.
    pub fn try_style(&mut self, key: &StyleKey) -> Result<ResolvedStyle, ResolveError> {
        self.resolve(key, false)
    }

    /// Resolves every style defined by an applicable fragment.
    ///
    /// Styles are returned in the order their key is first declared; keys
    /// that resolve to nothing are skipped.
    pub fn styles(&mut self) -> Vec<ResolvedStyle> {
        let units: Vec<&'a StyleUnit> = self
            .sheets
            .iter()
            .copied()
            .flat_map(SheetFragment::styles)
            .collect();
        let mut found: HashSet<&'a StyleKey> = HashSet::new();
        let mut styles = Vec::new();
        for unit in units {
            if found.contains(unit.key()) {
                continue;
            }
            if let Ok(style) = self.resolve(unit.key(), false) {
                found.insert(unit.key());
                styles.push(style);
            }
        }
        styles
    }

    /// Resolves every icon defined by an applicable fragment.
    ///
    /// Icon styles merge both the icon's own style units and any style units
    /// sharing the icon style's key. Styles without `content` yield no icon.
    pub fn icons(&mut self) -> ResolvedIcons {
        let icons: Vec<_> = self
            .sheets
            .iter()
            .copied()
            .flat_map(SheetFragment::icons)
            .collect();
        let mut found: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();
        for unit in icons {
            if found.contains(unit.name()) {
                continue;
            }
            let Ok(style) = self.resolve(unit.style().key(), true) else {
                continue;
            };
            if let Some(icon) = Icon::from_style(&style, self.options) {
                found.insert(unit.name());
                entries.push(IconEntry::new(unit.name().into(), icon, style));
            }
        }
        ResolvedIcons::new(entries)
    }

    fn cache(&mut self, for_icons: bool) -> &mut HashMap<StyleKey, Resolution> {
        if for_icons {
            &mut self.icon_styles
        } else {
            &mut self.styles
        }
    }

    fn resolve(&mut self, key: &StyleKey, for_icons: bool) -> Resolution {
        if let Some(cached) = self.cache(for_icons).get(key) {
            return cached.clone();
        }

        let stack = self.stacks.stack(key.kind());
        if stack.contains(key) {
            warn!("circular dependency detected in style {key}");
            return Err(ResolveError::CircularInclude(key.clone()));
        }
        stack.push(key.clone());

        let units = self.index.units(key, for_icons);
        let mut acc = StyleAccumulator::new(key.clone());
        for &unit in &units {
            self.merge_unit(&mut acc, unit, for_icons);
        }

        self.stacks.stack(key.kind()).pop();

        let resolution = if units.is_empty() {
            Err(ResolveError::NotFound(key.clone()))
        } else {
            acc.freeze(self.options)
                .ok_or_else(|| ResolveError::Empty(key.clone()))
        };
        self.cache(for_icons)
            .insert(key.clone(), resolution.clone());
        resolution
    }

    /// Resolves an include target, which never carries a client rule.
    fn resolve_include(
        &mut self,
        from: &StyleKey,
        target: &StyleKey,
        for_icons: bool,
    ) -> Option<ResolvedStyle> {
        let target = target.without_client_rule();
        match self.resolve(&target, for_icons) {
            Ok(style) => Some(style),
            Err(err) => {
                debug!("{from}: skipping include: {err}");
                None
            }
        }
    }

    fn merge_unit(&mut self, acc: &mut StyleAccumulator, unit: &'a StyleUnit, for_icons: bool) {
        let key = unit.key();

        if unit.resets_properties() || unit.inhibits_all() {
            acc.reset();
        }

        for target in unit.included_styles() {
            if let Some(style) = self.resolve_include(key, target, for_icons) {
                acc.add_included(&style);
            }
        }

        for include in unit.included_properties() {
            let Some(style) = self.resolve_include(key, include.source(), for_icons) else {
                continue;
            };
            let skin = self.options.is_skin_property(include.local_name());
            for record in included_records(include, &style, self.options) {
                if skin {
                    acc.add_skin_property(record);
                } else {
                    acc.add_property(record);
                }
            }
        }

        for embedded in unit.embedded_includes() {
            let mut pieces: SmallVec<[Arc<str>; 4]> = SmallVec::new();
            for segment in embedded.segments() {
                match segment {
                    EmbeddedSegment::Literal(text) => pieces.push(Arc::clone(text)),
                    EmbeddedSegment::Include(include) => {
                        let resolved = self
                            .resolve_include(key, include.source(), for_icons)
                            .and_then(|style| {
                                included_records(include, &style, self.options).into_iter().next()
                            });
                        if let Some(record) = resolved {
                            pieces.push(record.value().into());
                        }
                    }
                }
            }
            if pieces.is_empty() {
                continue;
            }
            let value = join(&pieces);
            let record = PropertyRecord::new(embedded.local_name(), value);
            if self.options.is_skin_property(embedded.local_name()) {
                acc.add_skin_property(record);
            } else {
                acc.add_property(record);
            }
        }

        for name in unit.inhibited_properties() {
            acc.remove_property(name);
            acc.remove_skin_property(name);
        }

        for record in unit.properties() {
            acc.add_property(record.clone());
        }
        for record in unit.skin_properties() {
            acc.add_skin_property(record.clone());
        }
    }
}

/// Picks the records `include` refers to out of a resolved source style.
///
/// A skin-prefixed local name draws on both regular and skin properties of
/// the source; any other name draws on regular properties only.
fn included_records(
    include: &IncludeProperty,
    style: &ResolvedStyle,
    options: &ResolveOptions,
) -> SmallVec<[PropertyRecord; 2]> {
    let mut records: SmallVec<[PropertyRecord; 2]> = include.pick(style.properties()).collect();
    if options.is_skin_property(include.local_name()) {
        records.extend(include.pick(style.skin_properties()));
    }
    records
}

fn join(pieces: &[Arc<str>]) -> String {
    let mut value = String::new();
    for piece in pieces {
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(piece);
    }
    value
}
