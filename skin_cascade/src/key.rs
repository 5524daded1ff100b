// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style identities.

use alloc::sync::Arc;
use core::fmt;

/// The two mutually exclusive ways a style unit can be identified.
///
/// A name and a selector may carry the same text without colliding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdKind {
    /// A CSS-like selector, e.g. `.AFDefaultFont` or `af|button::icon`.
    Selector,
    /// A logical style name, e.g. `DefaultFont`.
    Name,
}

/// The identity of a style unit: a selector or name, plus an optional
/// client-side rule qualifier.
///
/// The client rule (for example `@media print`) partitions otherwise
/// identical ids: `.x` and `.x` under `@media print` are resolved and cached
/// separately.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{IdKind, StyleKey};
///
/// let plain = StyleKey::selector(".x");
/// let print = StyleKey::selector(".x").with_client_rule("@media print");
///
/// assert_eq!(plain.kind(), IdKind::Selector);
/// assert_ne!(plain, print);
/// assert_eq!(print.without_client_rule(), plain);
/// assert_ne!(StyleKey::name(".x"), plain);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    kind: IdKind,
    id: Arc<str>,
    client_rule: Option<Arc<str>>,
}

impl StyleKey {
    /// Creates a selector-based key.
    #[must_use]
    pub fn selector(selector: impl Into<Arc<str>>) -> Self {
        Self::new(IdKind::Selector, selector)
    }

    /// Creates a name-based key.
    #[must_use]
    pub fn name(name: impl Into<Arc<str>>) -> Self {
        Self::new(IdKind::Name, name)
    }

    /// Creates a key of the given kind.
    #[must_use]
    pub fn new(kind: IdKind, id: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            id: id.into(),
            client_rule: None,
        }
    }

    /// Returns this key qualified by a client-side rule.
    #[must_use]
    pub fn with_client_rule(mut self, rule: impl Into<Arc<str>>) -> Self {
        self.client_rule = Some(rule.into());
        self
    }

    /// Returns this key without its client-side rule.
    #[must_use]
    pub fn without_client_rule(&self) -> Self {
        Self {
            kind: self.kind,
            id: Arc::clone(&self.id),
            client_rule: None,
        }
    }

    /// Returns the identity kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> IdKind {
        self.kind
    }

    /// Returns `true` for name-based keys.
    #[must_use]
    #[inline]
    pub fn is_named(&self) -> bool {
        self.kind == IdKind::Name
    }

    /// Returns the selector or name text.
    #[must_use]
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the client-side rule qualifier, if any.
    #[must_use]
    #[inline]
    pub fn client_rule(&self) -> Option<&str> {
        self.client_rule.as_deref()
    }
}

impl fmt::Debug for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleKey({self})")
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rule) = &self.client_rule {
            write!(f, "{rule} ")?;
        }
        match self.kind {
            IdKind::Selector => f.write_str(&self.id),
            IdKind::Name => write!(f, "name({})", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_and_selectors_do_not_collide() {
        assert_ne!(StyleKey::name("Foo"), StyleKey::selector("Foo"));
        assert!(StyleKey::name("Foo").is_named());
        assert!(!StyleKey::selector("Foo").is_named());
    }

    #[test]
    fn display_includes_rule() {
        let key = StyleKey::selector(".x").with_client_rule("@media print");
        assert_eq!(key.to_string(), "@media print .x");
        assert_eq!(StyleKey::name("Foo").to_string(), "name(Foo)");
    }
}
