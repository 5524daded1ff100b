// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scratch buffer for merging one style.

use alloc::string::ToString;
use alloc::vec::Vec;

use log::debug;
use skin_property::{AbsoluteFontSize, FONT_SIZE, PropertyRecord, RelativeColor, RelativeFontSize, Rgb};
use smallvec::SmallVec;

use crate::key::StyleKey;
use crate::options::ResolveOptions;
use crate::resolved::ResolvedStyle;

/// Mutable merge state for a single resolution.
///
/// Later additions replace earlier properties of the same name. Relative font
/// sizes accumulate into a delta applied once at [`freeze`](Self::freeze);
/// relative colors are applied immediately to the current value.
#[derive(Debug)]
pub(crate) struct StyleAccumulator {
    key: StyleKey,
    properties: SmallVec<[PropertyRecord; 8]>,
    skin_properties: SmallVec<[PropertyRecord; 2]>,
    relative_font_size: i32,
}

impl StyleAccumulator {
    pub(crate) fn new(key: StyleKey) -> Self {
        Self {
            key,
            properties: SmallVec::new(),
            skin_properties: SmallVec::new(),
            relative_font_size: 0,
        }
    }

    /// Forgets everything merged so far.
    pub(crate) fn reset(&mut self) {
        self.properties.clear();
        self.skin_properties.clear();
        self.relative_font_size = 0;
    }

    pub(crate) fn add_property(&mut self, record: PropertyRecord) {
        if record.is_named(FONT_SIZE) && RelativeFontSize::is_relative(record.value()) {
            match RelativeFontSize::parse(record.value()) {
                Ok(relative) => {
                    self.relative_font_size = self.relative_font_size.saturating_add(relative.delta());
                }
                Err(err) => debug!("{}: dropping {err}", self.key),
            }
        } else if RelativeColor::is_relative(record.value()) {
            self.add_relative_color(&record);
        } else {
            self.remove_property(record.name());
            if record.is_named(FONT_SIZE) {
                self.relative_font_size = 0;
            }
            self.properties.push(record);
        }
    }

    fn add_relative_color(&mut self, record: &PropertyRecord) {
        let relative = match RelativeColor::parse(record.value()) {
            Ok(relative) => relative,
            Err(err) => {
                debug!("{}: dropping {err}", self.key);
                return;
            }
        };
        let Some(current) = self.property_value(record.name()) else {
            return;
        };
        match Rgb::parse(current) {
            Ok(base) => {
                let resolved = relative.apply(base);
                self.add_property(PropertyRecord::new(record.name(), resolved.to_string()));
            }
            Err(err) => debug!(
                "{}: cannot apply `{}` to {err}",
                self.key,
                record.value()
            ),
        }
    }

    pub(crate) fn add_skin_property(&mut self, record: PropertyRecord) {
        self.remove_skin_property(record.name());
        self.skin_properties.push(record);
    }

    pub(crate) fn remove_property(&mut self, name: &str) {
        if let Some(index) = self.properties.iter().position(|r| r.is_named(name)) {
            self.properties.remove(index);
        }
    }

    pub(crate) fn remove_skin_property(&mut self, name: &str) {
        if let Some(index) = self.skin_properties.iter().position(|r| r.is_named(name)) {
            self.skin_properties.remove(index);
        }
    }

    /// Copies every property of an already resolved style.
    pub(crate) fn add_included(&mut self, style: &ResolvedStyle) {
        for record in style.properties() {
            self.add_property(record.clone());
        }
        for record in style.skin_properties() {
            self.add_skin_property(record.clone());
        }
    }

    fn property_value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|r| r.is_named(name))
            .map(PropertyRecord::value)
    }

    /// Converts the merged state into a [`ResolvedStyle`].
    ///
    /// Suppressed properties are dropped first, then the accumulated font size
    /// delta is applied. Returns `None` if nothing is left.
    pub(crate) fn freeze(self, options: &ResolveOptions) -> Option<ResolvedStyle> {
        let delta = self.relative_font_size;
        let key = self.key;
        let properties: Vec<PropertyRecord> = self
            .properties
            .into_iter()
            .filter(|record| !options.is_suppressed(record.name()))
            .map(|record| {
                if delta == 0 || !record.is_named(FONT_SIZE) {
                    return record;
                }
                match AbsoluteFontSize::parse(record.value()) {
                    Ok(size) => PropertyRecord::new(FONT_SIZE, size.offset(delta).to_string()),
                    Err(err) => {
                        debug!("{key}: keeping {err}");
                        record
                    }
                }
            })
            .collect();

        if properties.is_empty() && self.skin_properties.is_empty() {
            return None;
        }
        Some(ResolvedStyle::new(
            key,
            properties.into(),
            self.skin_properties.into_vec().into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulator() -> StyleAccumulator {
        StyleAccumulator::new(StyleKey::selector(".x"))
    }

    fn freeze(acc: StyleAccumulator) -> ResolvedStyle {
        acc.freeze(&ResolveOptions::default())
            .expect("accumulator should not be empty")
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("color", "red"));
        acc.add_property(PropertyRecord::new("border", "none"));
        acc.add_property(PropertyRecord::new("color", "blue"));
        let style = freeze(acc);
        assert_eq!(style.property("color"), Some("blue"));
        assert_eq!(style.properties().len(), 2);
        assert_eq!(style.properties()[1].name(), "color");
    }

    #[test]
    fn relative_font_sizes_accumulate() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "10pt"));
        acc.add_property(PropertyRecord::new("font-size", "+2pt"));
        acc.add_property(PropertyRecord::new("font-size", "-1pt"));
        assert_eq!(freeze(acc).property("font-size"), Some("11pt"));
    }

    #[test]
    fn absolute_font_size_clears_delta() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "+4pt"));
        acc.add_property(PropertyRecord::new("font-size", "12px"));
        acc.add_property(PropertyRecord::new("font-size", "+1px"));
        assert_eq!(freeze(acc).property("font-size"), Some("13px"));
    }

    #[test]
    fn relative_font_size_without_base_is_dropped() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "+2pt"));
        acc.add_property(PropertyRecord::new("color", "red"));
        let style = freeze(acc);
        assert_eq!(style.property("font-size"), None);
    }

    #[test]
    fn keyword_font_size_is_kept() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "small"));
        acc.add_property(PropertyRecord::new("font-size", "+2pt"));
        assert_eq!(freeze(acc).property("font-size"), Some("small"));
    }

    #[test]
    fn malformed_relative_font_size_is_ignored() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "10pt"));
        acc.add_property(PropertyRecord::new("font-size", "+2em"));
        assert_eq!(freeze(acc).property("font-size"), Some("10pt"));
    }

    #[test]
    fn relative_color_uses_current_value() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("background-color", "#f0f0f0"));
        acc.add_property(PropertyRecord::new("background-color", "+#202020"));
        assert_eq!(freeze(acc).property("background-color"), Some("#ffffff"));

        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("color", "#0f0f0f"));
        acc.add_property(PropertyRecord::new("color", "-#202020"));
        assert_eq!(freeze(acc).property("color"), Some("#000000"));
    }

    #[test]
    fn relative_color_without_base_is_dropped() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("color", "+#202020"));
        assert!(acc.freeze(&ResolveOptions::default()).is_none());
    }

    #[test]
    fn malformed_relative_color_keeps_base() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("color", "#101010"));
        acc.add_property(PropertyRecord::new("color", "+#ggg"));
        assert_eq!(freeze(acc).property("color"), Some("#101010"));
    }

    #[test]
    fn relative_color_on_keyword_base_keeps_base() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("color", "inherit"));
        acc.add_property(PropertyRecord::new("color", "+#111"));
        let style = freeze(acc);
        assert_eq!(style.property("color"), Some("inherit"));
        assert_eq!(style.properties().len(), 1);
    }

    #[test]
    fn sign_prefixed_font_size_keyword_is_dropped() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "10pt"));
        acc.add_property(PropertyRecord::new("font-size", "-webkit-xxx-large"));
        assert_eq!(freeze(acc).property("font-size"), Some("10pt"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("font-size", "10pt"));
        acc.add_property(PropertyRecord::new("font-size", "+3pt"));
        acc.add_skin_property(PropertyRecord::new("-tr-open", "true"));
        acc.reset();
        acc.add_property(PropertyRecord::new("font-size", "8pt"));
        let style = freeze(acc);
        assert_eq!(style.property("font-size"), Some("8pt"));
        assert!(style.skin_properties().is_empty());
    }

    #[test]
    fn suppressed_properties_are_dropped_at_freeze() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("border-radius", "4px"));
        acc.add_property(PropertyRecord::new("color", "red"));
        let style = acc
            .freeze(&ResolveOptions::legacy_ie())
            .expect("color survives");
        assert_eq!(style.property("border-radius"), None);
        assert_eq!(style.property("color"), Some("red"));
    }

    #[test]
    fn only_suppressed_properties_freeze_to_nothing() {
        let mut acc = accumulator();
        acc.add_property(PropertyRecord::new("box-shadow", "none"));
        assert!(acc.freeze(&ResolveOptions::legacy_ie()).is_none());
    }

    #[test]
    fn skin_properties_replace_by_name() {
        let mut acc = accumulator();
        acc.add_skin_property(PropertyRecord::new("-tr-open", "true"));
        acc.add_skin_property(PropertyRecord::new("-tr-open", "false"));
        acc.remove_property("-tr-open");
        let style = freeze(acc);
        assert_eq!(style.skin_property("-tr-open"), Some("false"));
        assert_eq!(style.skin_properties().len(), 1);
    }
}
