// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution options.

use alloc::sync::Arc;

use hashbrown::HashSet;
use skin_property::SKIN_PROPERTY_PREFIX;

/// Default `content` prefix that produces the null icon.
pub const INHIBIT_MARKER: &str = "inhibit";

/// Visual properties dropped by [`ResolveOptions::destyled`].
///
/// Layout-affecting properties such as `display`, `width`, and `position`
/// are not listed and survive.
pub const DESTYLED_PROPERTIES: &[&str] = &[
    "background-attachment", "background-color", "background-image", "background-position",
    "background-repeat", "background",
    "border-collapse", "border-color", "border-spacing", "border-style",
    "border-top", "border-right", "border-bottom", "border-left",
    "border-top-color", "border-right-color", "border-bottom-color", "border-left-color",
    "border-top-width", "border-right-width", "border-bottom-width", "border-left-width",
    "border-width", "border", "border-image", "border-radius",
    "caption-side",
    "color",
    "content",
    "cursor",
    "font-family", "font-size", "font-style", "font-variant", "font-weight", "font",
    "font-feature-settings", "font-kerning", "font-language-override", "font-size-adjust",
    "font-stretch", "font-variant-alternates", "font-variant-caps", "font-variant-east-asian",
    "font-variant-ligatures", "font-variant-numeric", "font-variant-position",
    "hanging-punctuation",
    "hyphens",
    "icon",
    "letter-spacing",
    "line-break",
    "list-style-image", "list-style-position", "list-style-type", "list-style",
    "margin-right", "margin-left", "margin-top", "margin-bottom", "margin",
    "marquee-direction", "marquee-loop", "marquee-speed", "marquee-style",
    "opacity",
    "outline-color", "outline-style", "outline-width", "outline", "outline-offset",
    "overflow-style", "overflow-wrap",
    "padding-top", "padding-right", "padding-bottom", "padding-left", "padding",
    "resize",
    "rotation", "rotation-point",
    "target-new", "target-position",
    "text-align", "text-align-last", "text-decoration", "text-indent", "text-justify",
    "text-transform", "text-overflow",
    "transition", "transition-delay", "transition-duration", "transition-property",
    "transition-timing-function",
    "vertical-align",
    "white-space",
    "word-break", "word-spacing", "word-wrap",
];

/// Knobs that shape how a document resolves styles and icons.
///
/// Options are supplied once, when the document is built, and apply to every
/// query made against it.
///
/// # Example
///
/// ```rust
/// use skin_cascade::ResolveOptions;
///
/// let options = ResolveOptions::builder()
///     .skin_property_prefix("-af-")
///     .suppress("text-shadow")
///     .build();
///
/// assert!(options.is_skin_property("-af-icon-size"));
/// assert!(options.is_suppressed("text-shadow"));
/// assert!(!ResolveOptions::default().is_suppressed("text-shadow"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    skin_property_prefix: Arc<str>,
    inhibit_marker: Arc<str>,
    suppressed_properties: HashSet<Arc<str>>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            skin_property_prefix: SKIN_PROPERTY_PREFIX.into(),
            inhibit_marker: INHIBIT_MARKER.into(),
            suppressed_properties: HashSet::new(),
        }
    }
}

impl ResolveOptions {
    /// Returns a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ResolveOptionsBuilder {
        ResolveOptionsBuilder {
            options: Self::default(),
        }
    }

    /// Options for agents that cannot take rounded borders or box shadows.
    #[must_use]
    pub fn legacy_ie() -> Self {
        Self::builder()
            .suppress("border-radius")
            .suppress("box-shadow")
            .build()
    }

    /// Options for a destyled rendering: every purely visual property in
    /// [`DESTYLED_PROPERTIES`] is dropped, leaving structure and layout.
    #[must_use]
    pub fn destyled() -> Self {
        DESTYLED_PROPERTIES
            .iter()
            .fold(Self::builder(), |builder, &name| builder.suppress(name))
            .build()
    }

    /// Returns the prefix marking skin (server-side) properties.
    #[must_use]
    pub fn skin_property_prefix(&self) -> &str {
        &self.skin_property_prefix
    }

    /// Returns the `content` prefix producing the null icon.
    #[must_use]
    pub fn inhibit_marker(&self) -> &str {
        &self.inhibit_marker
    }

    /// Returns `true` if `name` is a skin property name.
    #[must_use]
    pub fn is_skin_property(&self, name: &str) -> bool {
        name.starts_with(&*self.skin_property_prefix)
    }

    /// Returns `true` if `name` is dropped from resolved regular properties.
    #[must_use]
    pub fn is_suppressed(&self, name: &str) -> bool {
        self.suppressed_properties.contains(name)
    }
}

/// Builder for [`ResolveOptions`].
#[derive(Debug)]
pub struct ResolveOptionsBuilder {
    options: ResolveOptions,
}

impl ResolveOptionsBuilder {
    /// Sets the skin property prefix.
    #[must_use]
    pub fn skin_property_prefix(mut self, prefix: impl Into<Arc<str>>) -> Self {
        self.options.skin_property_prefix = prefix.into();
        self
    }

    /// Sets the null-icon marker.
    #[must_use]
    pub fn inhibit_marker(mut self, marker: impl Into<Arc<str>>) -> Self {
        self.options.inhibit_marker = marker.into();
        self
    }

    /// Drops `name` from every resolved style's regular properties.
    #[must_use]
    pub fn suppress(mut self, name: impl Into<Arc<str>>) -> Self {
        self.options.suppressed_properties.insert(name.into());
        self
    }

    /// Builds the options.
    #[must_use]
    pub fn build(self) -> ResolveOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ResolveOptions::default();
        assert_eq!(options.skin_property_prefix(), "-tr-");
        assert_eq!(options.inhibit_marker(), "inhibit");
        assert!(options.is_skin_property("-tr-open-icon"));
        assert!(!options.is_skin_property("color"));
    }

    #[test]
    fn legacy_ie_suppresses_rounded_borders_and_shadows() {
        let options = ResolveOptions::legacy_ie();
        assert!(options.is_suppressed("border-radius"));
        assert!(options.is_suppressed("box-shadow"));
        assert!(!options.is_suppressed("border"));
    }

    #[test]
    fn destyled_keeps_layout_properties() {
        let options = ResolveOptions::destyled();
        for name in ["color", "background", "font-size", "padding-left", "content"] {
            assert!(options.is_suppressed(name), "{name} should be suppressed");
        }
        for name in ["display", "width", "height", "position", "float"] {
            assert!(!options.is_suppressed(name), "{name} should survive");
        }
        assert!(!options.is_skin_property("color"));
    }
}
