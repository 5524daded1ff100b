// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skin Cascade: style-sheet cascade resolution for skins.
//!
//! A skin is a set of parsed [`SheetFragment`]s, each applying under some
//! conditions (locale, reading direction, agent, rendering mode,
//! accessibility). Given a [`StyleContext`], this crate picks the applicable
//! fragments, orders them by specificity, and merges every style unit
//! matching a selector or name into one [`ResolvedStyle`]:
//!
//! **reset → included styles → included properties → composite values →
//! inhibited properties → own properties → own skin properties**
//!
//! ## Core Concepts
//!
//! ### Style Units
//!
//! A [`StyleUnit`] is one parsed style definition. Besides its own properties
//! it can pull in other styles wholesale ([`StyleUnitBuilder::include_style`]),
//! borrow single properties ([`IncludeProperty`]), or compose a value from
//! several borrowed pieces ([`EmbeddedInclude`]).
//!
//! ```rust
//! use skin_cascade::{
//!     IncludeProperty, SheetFragment, StyleContext, StyleKey, StyleSheetDocument,
//!     StyleUnitBuilder,
//! };
//!
//! let base = SheetFragment::builder()
//!     .style(StyleUnitBuilder::selector(".AFDarkBackground:alias").property("color", "#333333").build())
//!     .style(
//!         StyleUnitBuilder::selector(".AFButton")
//!             .property("color", "#f0f0f0")
//!             .property("color", "+#202020")
//!             .include_property(IncludeProperty::renamed(
//!                 StyleKey::selector(".AFDarkBackground:alias"),
//!                 "color",
//!                 "background-color",
//!             ))
//!             .build(),
//!     )
//!     .build();
//! let document = StyleSheetDocument::builder().sheet(base).build();
//!
//! let button = document.resolve_by_selector(&StyleContext::new(), ".AFButton").unwrap();
//! assert_eq!(button.property("color"), Some("#ffffff"));
//! assert_eq!(button.property("background-color"), Some("#333333"));
//! ```
//!
//! ### Relative Values
//!
//! A signed `font-size` (`+2pt`, `-1px`) accumulates and is applied once to
//! the final absolute size. A signed color (`+#202020`) is applied right away
//! to the current value of the same property. Either is dropped when there is
//! nothing to apply it to.
//!
//! ### Icons
//!
//! Icon units are resolved like styles, then classified by their `content`
//! property into an [`Icon`]: an image, a context-relative image, text, or the
//! explicit null icon.
//!
//! ### Failure
//!
//! Resolution never fails loudly. Missing include targets, include cycles,
//! and malformed relative values are logged through the `log` facade and
//! otherwise ignored; queries return `None` for styles with nothing in them.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accumulate;
mod context;
mod document;
mod icon;
mod key;
mod options;
mod resolve;
mod resolved;
mod sheet;
mod style;
mod variant;
mod version;

pub use context::{AccessibilityProfile, Agent, Direction, Locale, RenderingMode, StyleContext};
pub use document::{StyleSheetDocument, StyleSheetDocumentBuilder, UNKNOWN_TIMESTAMP};
pub use icon::{Icon, IconEntry, IconUnit, ImageIcon, InlineStyle, ResolvedIcons, TextIcon};
pub use key::{IdKind, StyleKey};
pub use options::{DESTYLED_PROPERTIES, INHIBIT_MARKER, ResolveOptions, ResolveOptionsBuilder};
pub use resolve::{ResolveError, ResolveSession};
pub use resolved::ResolvedStyle;
pub use sheet::{SheetFragment, SheetFragmentBuilder, SheetId};
pub use style::{EmbeddedInclude, EmbeddedSegment, IncludeProperty, StyleUnit, StyleUnitBuilder};
pub use variant::{AgentMatch, SheetVariants, Specificity};
pub use version::{Version, VersionParseError, VersionRange};

pub use skin_property::PropertyRecord;
