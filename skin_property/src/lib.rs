// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skin Property: the atomic unit of skin style data.
//!
//! This crate provides [`PropertyRecord`], an immutable name/value pair, and
//! the handful of value micro-grammars a style cascade has to interpret while
//! merging. Everything else about a value is opaque: `1px solid #ccc` is stored
//! and compared as a single string.
//!
//! ## Interpreted Values
//!
//! | Grammar | Example | Type |
//! |---------|---------|------|
//! | Relative font size | `+2pt`, `-1px` | [`RelativeFontSize`] |
//! | Absolute font size | `10pt`, `12px`, `9` | [`AbsoluteFontSize`] |
//! | Relative color | `+#202020`, `-#111` | [`RelativeColor`] |
//! | Absolute color | `#f0f0f0`, `red`, `rgb(1, 2, 3)` | [`Rgb`] |
//! | Pixel integer | `16`, `16px` | [`parse_pixel_integer`] |
//! | URL reference | `url("/images/x.png")` | [`url_value`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use skin_property::{PropertyRecord, RelativeColor, Rgb};
//!
//! let base = PropertyRecord::new("color", "#f0f0f0");
//! let lighter = RelativeColor::parse("+#202020").unwrap();
//!
//! let base_rgb = Rgb::parse(base.value()).unwrap();
//! assert_eq!(lighter.apply(base_rgb).to_string(), "#ffffff");
//! ```
//!
//! ## Skin Properties
//!
//! Names starting with [`SKIN_PROPERTY_PREFIX`] are server-side ("skin")
//! properties. They are carried through the cascade like any other property
//! but are never emitted as literal CSS.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod content;
mod error;
mod font;
mod record;
mod sign;

pub use color::{RelativeColor, Rgb};
pub use content::{has_mismatched_quotes, is_absolute_uri, parse_pixel_integer, trim_quotes, url_value};
pub use error::{ValueKind, ValueParseError};
pub use font::{AbsoluteFontSize, FontSizeUnit, RelativeFontSize};
pub use record::PropertyRecord;
pub use sign::Sign;

/// Default name prefix marking a skin (server-side) property.
pub const SKIN_PROPERTY_PREFIX: &str = "-tr-";

/// Name of the font size property, which gets relative-size treatment.
pub const FONT_SIZE: &str = "font-size";
