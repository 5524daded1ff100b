// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fully resolved styles.

use alloc::sync::Arc;

use skin_property::PropertyRecord;

use crate::key::StyleKey;

/// A style with every include expanded into concrete property records.
///
/// A resolved style always holds at least one property or skin property;
/// resolution reports an empty result as absence instead. Clones share the
/// property storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    key: StyleKey,
    properties: Arc<[PropertyRecord]>,
    skin_properties: Arc<[PropertyRecord]>,
}

impl ResolvedStyle {
    pub(crate) fn new(
        key: StyleKey,
        properties: Arc<[PropertyRecord]>,
        skin_properties: Arc<[PropertyRecord]>,
    ) -> Self {
        Self {
            key,
            properties,
            skin_properties,
        }
    }

    /// Returns the identity this style was resolved for.
    #[must_use]
    #[inline]
    pub fn key(&self) -> &StyleKey {
        &self.key
    }

    /// Returns the selector, for selector-based styles.
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        (!self.key.is_named()).then(|| self.key.id())
    }

    /// Returns the name, for name-based styles.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.key.is_named().then(|| self.key.id())
    }

    /// Returns the client-side rule qualifier, if any.
    #[must_use]
    pub fn client_rule(&self) -> Option<&str> {
        self.key.client_rule()
    }

    /// Returns the regular properties in merge order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    /// Returns the skin (server-side) properties in merge order.
    #[must_use]
    pub fn skin_properties(&self) -> &[PropertyRecord] {
        &self.skin_properties
    }

    /// Returns the value of the regular property `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        find(&self.properties, name)
    }

    /// Returns the value of the skin property `name`.
    #[must_use]
    pub fn skin_property(&self, name: &str) -> Option<&str> {
        find(&self.skin_properties, name)
    }

    /// Returns the total number of regular and skin properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len() + self.skin_properties.len()
    }

    /// Returns `true` if there are no properties at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn find<'a>(records: &'a [PropertyRecord], name: &str) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.is_named(name))
        .map(PropertyRecord::value)
}
