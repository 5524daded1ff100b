// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw (unresolved) style units.
//!
//! A [`StyleUnit`] is one parsed style definition as it appears in a sheet
//! fragment: its own properties plus references to other styles that are
//! only expanded at resolution time. See [`ResolvedStyle`](crate::ResolvedStyle)
//! for the expanded form.

use alloc::sync::Arc;
use alloc::vec::Vec;

use skin_property::PropertyRecord;

use crate::key::StyleKey;

/// A reference to a single property of another style, optionally renamed.
///
/// `color: -tr-property-ref(".AFDark:alias", "background-color")` reads
/// `background-color` from `.AFDark:alias` and stores it as `color`.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{IncludeProperty, StyleKey};
///
/// let include = IncludeProperty::renamed(
///     StyleKey::selector(".AFDark:alias"),
///     "background-color",
///     "color",
/// );
/// assert_eq!(include.property(), "background-color");
/// assert_eq!(include.local_name(), "color");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IncludeProperty {
    source: StyleKey,
    property: Arc<str>,
    local_name: Arc<str>,
}

impl IncludeProperty {
    /// Includes `property` from `source` under the same name.
    #[must_use]
    pub fn new(source: StyleKey, property: impl Into<Arc<str>>) -> Self {
        let property = property.into();
        Self {
            source,
            local_name: Arc::clone(&property),
            property,
        }
    }

    /// Includes `property` from `source` under `local_name`.
    #[must_use]
    pub fn renamed(
        source: StyleKey,
        property: impl Into<Arc<str>>,
        local_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            source,
            property: property.into(),
            local_name: local_name.into(),
        }
    }

    /// Returns the style the property is read from.
    #[must_use]
    pub fn source(&self) -> &StyleKey {
        &self.source
    }

    /// Returns the name of the property read from the source.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the name the property is stored under.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Yields every record in `records` named [`property`](Self::property),
    /// renamed to [`local_name`](Self::local_name).
    pub(crate) fn pick<'r>(
        &'r self,
        records: &'r [PropertyRecord],
    ) -> impl Iterator<Item = PropertyRecord> + 'r {
        records
            .iter()
            .filter(|record| record.is_named(&self.property))
            .map(|record| record.renamed(&self.local_name))
    }
}

/// One piece of a composite property value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EmbeddedSegment {
    /// Literal text, copied as-is.
    Literal(Arc<str>),
    /// A placeholder filled from another style's property.
    Include(IncludeProperty),
}

/// A composite property value with one or more embedded property references.
///
/// `border: 1px solid -tr-property-ref(".AFDark:alias", "color")` becomes
/// the segments `1px`, `solid`, and a placeholder. At resolution time each
/// placeholder is replaced by the referenced value (or dropped if it cannot
/// be resolved) and the pieces are joined with single spaces.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{EmbeddedInclude, IncludeProperty, StyleKey};
///
/// let border = EmbeddedInclude::new("border")
///     .literal("1px")
///     .literal("solid")
///     .include(IncludeProperty::new(StyleKey::selector(".AFDark:alias"), "color"));
/// assert_eq!(border.segments().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddedInclude {
    local_name: Arc<str>,
    segments: Vec<EmbeddedSegment>,
}

impl EmbeddedInclude {
    /// Creates an empty composite value for the property `local_name`.
    #[must_use]
    pub fn new(local_name: impl Into<Arc<str>>) -> Self {
        Self {
            local_name: local_name.into(),
            segments: Vec::new(),
        }
    }

    /// Appends literal text.
    #[must_use]
    pub fn literal(mut self, text: impl Into<Arc<str>>) -> Self {
        self.segments.push(EmbeddedSegment::Literal(text.into()));
        self
    }

    /// Appends a placeholder.
    #[must_use]
    pub fn include(mut self, include: IncludeProperty) -> Self {
        self.segments.push(EmbeddedSegment::Include(include));
        self
    }

    /// Returns the name of the composed property.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[EmbeddedSegment] {
        &self.segments
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct StyleUnitData {
    key: StyleKey,
    properties: Vec<PropertyRecord>,
    skin_properties: Vec<PropertyRecord>,
    included_styles: Vec<StyleKey>,
    included_properties: Vec<IncludeProperty>,
    embedded_includes: Vec<EmbeddedInclude>,
    inhibited_properties: Vec<Arc<str>>,
    inhibits_all: bool,
    resets_properties: bool,
}

/// One parsed style definition.
///
/// Style units are immutable after creation and cheap to clone (`Arc`). Use
/// [`StyleUnitBuilder`] to construct them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleUnit {
    inner: Arc<StyleUnitData>,
}

impl StyleUnit {
    /// Returns the identity of this unit.
    #[must_use]
    #[inline]
    pub fn key(&self) -> &StyleKey {
        &self.inner.key
    }

    /// Returns the unit's own properties, in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyRecord] {
        &self.inner.properties
    }

    /// Returns the unit's own skin (server-side) properties.
    #[must_use]
    pub fn skin_properties(&self) -> &[PropertyRecord] {
        &self.inner.skin_properties
    }

    /// Returns the styles merged in wholesale.
    #[must_use]
    pub fn included_styles(&self) -> &[StyleKey] {
        &self.inner.included_styles
    }

    /// Returns the single-property includes.
    #[must_use]
    pub fn included_properties(&self) -> &[IncludeProperty] {
        &self.inner.included_properties
    }

    /// Returns the composite-value includes.
    #[must_use]
    pub fn embedded_includes(&self) -> &[EmbeddedInclude] {
        &self.inner.embedded_includes
    }

    /// Returns the names removed from the cascade at this unit.
    #[must_use]
    pub fn inhibited_properties(&self) -> &[Arc<str>] {
        &self.inner.inhibited_properties
    }

    /// Returns `true` if this unit inhibits every earlier property.
    #[must_use]
    pub fn inhibits_all(&self) -> bool {
        self.inner.inhibits_all
    }

    /// Returns `true` if this unit discards everything accumulated before it.
    #[must_use]
    pub fn resets_properties(&self) -> bool {
        self.inner.resets_properties
    }
}

/// Builder for constructing [`StyleUnit`] instances.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{StyleKey, StyleUnitBuilder};
///
/// let unit = StyleUnitBuilder::selector(".AFButton")
///     .property("color", "blue")
///     .skin_property("-tr-show-icon", "true")
///     .include_style(StyleKey::name("DefaultFont"))
///     .inhibit("border")
///     .build();
///
/// assert_eq!(unit.key(), &StyleKey::selector(".AFButton"));
/// assert_eq!(unit.properties().len(), 1);
/// assert_eq!(unit.included_styles().len(), 1);
/// ```
#[derive(Debug)]
pub struct StyleUnitBuilder {
    data: StyleUnitData,
}

impl StyleUnitBuilder {
    /// Creates a builder for a unit with the given identity.
    #[must_use]
    pub fn new(key: StyleKey) -> Self {
        Self {
            data: StyleUnitData {
                key,
                properties: Vec::new(),
                skin_properties: Vec::new(),
                included_styles: Vec::new(),
                included_properties: Vec::new(),
                embedded_includes: Vec::new(),
                inhibited_properties: Vec::new(),
                inhibits_all: false,
                resets_properties: false,
            },
        }
    }

    /// Creates a builder for a selector-based unit.
    #[must_use]
    pub fn selector(selector: impl Into<Arc<str>>) -> Self {
        Self::new(StyleKey::selector(selector))
    }

    /// Creates a builder for a name-based unit.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::new(StyleKey::name(name))
    }

    /// Qualifies the unit with a client-side rule such as `@media print`.
    #[must_use]
    pub fn client_rule(mut self, rule: impl Into<Arc<str>>) -> Self {
        self.data.key = self.data.key.with_client_rule(rule);
        self
    }

    /// Adds an own property.
    #[must_use]
    pub fn property(mut self, name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        self.data.properties.push(PropertyRecord::new(name, value));
        self
    }

    /// Adds an own skin (server-side) property.
    #[must_use]
    pub fn skin_property(
        mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
    ) -> Self {
        self.data
            .skin_properties
            .push(PropertyRecord::new(name, value));
        self
    }

    /// Merges another style in wholesale.
    #[must_use]
    pub fn include_style(mut self, key: StyleKey) -> Self {
        self.data.included_styles.push(key);
        self
    }

    /// Includes a single property of another style.
    #[must_use]
    pub fn include_property(mut self, include: IncludeProperty) -> Self {
        self.data.included_properties.push(include);
        self
    }

    /// Adds a composite value built from other styles' properties.
    #[must_use]
    pub fn embedded(mut self, embedded: EmbeddedInclude) -> Self {
        self.data.embedded_includes.push(embedded);
        self
    }

    /// Removes a property from the cascade at this unit.
    #[must_use]
    pub fn inhibit(mut self, name: impl Into<Arc<str>>) -> Self {
        self.data.inhibited_properties.push(name.into());
        self
    }

    /// Inhibits every property accumulated before this unit.
    #[must_use]
    pub fn inhibit_all(mut self) -> Self {
        self.data.inhibits_all = true;
        self
    }

    /// Starts the property set fresh at this unit.
    #[must_use]
    pub fn reset_properties(mut self) -> Self {
        self.data.resets_properties = true;
        self
    }

    /// Builds the unit.
    #[must_use]
    pub fn build(self) -> StyleUnit {
        StyleUnit {
            inner: Arc::new(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn builder_keeps_declaration_order() {
        let unit = StyleUnitBuilder::selector(".x")
            .property("color", "red")
            .property("border", "1px")
            .property("color", "blue")
            .build();
        let names: Vec<_> = unit.properties().iter().map(PropertyRecord::name).collect();
        assert_eq!(names, vec!["color", "border", "color"]);
    }

    #[test]
    fn client_rule_becomes_part_of_the_key() {
        let unit = StyleUnitBuilder::selector(".x")
            .client_rule("@media print")
            .build();
        assert_eq!(unit.key().client_rule(), Some("@media print"));
        assert_eq!(unit.key().id(), ".x");
    }

    #[test]
    fn flags_default_off() {
        let unit = StyleUnitBuilder::named("Plain").build();
        assert!(!unit.inhibits_all());
        assert!(!unit.resets_properties());

        let reset = StyleUnitBuilder::named("Reset").reset_properties().build();
        assert!(reset.resets_properties());
    }

    #[test]
    fn include_property_pick_renames() {
        let include = IncludeProperty::renamed(StyleKey::name("Dark"), "color", "border-color");
        let records = [
            PropertyRecord::new("color", "#333"),
            PropertyRecord::new("background", "white"),
        ];
        let picked: Vec<_> = include.pick(&records).collect();
        assert_eq!(picked, vec![PropertyRecord::new("border-color", "#333")]);
    }

    #[test]
    fn clone_is_shallow() {
        let unit = StyleUnitBuilder::selector(".x").property("color", "red").build();
        let copy = unit.clone();
        assert!(Arc::ptr_eq(&unit.inner, &copy.inner));
    }
}
