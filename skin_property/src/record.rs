// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable property records.

use alloc::sync::Arc;
use core::fmt;

/// An immutable name/value pair.
///
/// Two records describe the "same property" iff their names compare equal
/// (exact string match). Values are opaque strings; composite values such as
/// `1px solid #rrggbb` are stored as-is.
///
/// Records are cheap to clone: both halves are reference counted, so a record
/// can be shared between a source style unit and any number of resolved styles.
///
/// # Example
///
/// ```rust
/// use skin_property::PropertyRecord;
///
/// let color = PropertyRecord::new("color", "red");
/// let background = color.renamed("background-color");
///
/// assert_eq!(background.name(), "background-color");
/// assert_eq!(background.value(), "red");
/// assert!(!color.same_property(&background));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PropertyRecord {
    name: Arc<str>,
    value: Arc<str>,
}

impl PropertyRecord {
    /// Creates a record with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if this record has the given name.
    #[must_use]
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        &*self.name == name
    }

    /// Returns `true` if both records name the same property.
    #[must_use]
    #[inline]
    pub fn same_property(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns a record with the same value under a different name.
    ///
    /// The value is shared, not copied.
    #[must_use]
    pub fn renamed(&self, name: &str) -> Self {
        if self.is_named(name) {
            return self.clone();
        }
        Self {
            name: name.into(),
            value: Arc::clone(&self.value),
        }
    }
}

impl fmt::Debug for PropertyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyRecord({}: {:?})", self.name, self.value)
    }
}

impl fmt::Display for PropertyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}
