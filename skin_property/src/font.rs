// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute and relative font sizes.
//!
//! Only points and pixels take part in relative arithmetic. Relative deltas are
//! plain integers: the unit of the delta is not converted, the delta is added
//! to whatever unit the absolute size was declared in.

use core::fmt;

use crate::error::{ValueKind, ValueParseError};
use crate::sign::Sign;

/// Unit suffix of a font size taking part in relative arithmetic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSizeUnit {
    /// `pt`. Also assumed for sizes without a suffix.
    #[default]
    Points,
    /// `px`.
    Pixels,
}

impl FontSizeUnit {
    /// Returns the CSS suffix for this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Points => "pt",
            Self::Pixels => "px",
        }
    }

    /// Splits a trailing `pt`/`px` suffix off `value`.
    fn split(value: &str) -> (&str, Option<Self>) {
        if let Some(number) = value.strip_suffix("pt") {
            (number, Some(Self::Points))
        } else if let Some(number) = value.strip_suffix("px") {
            (number, Some(Self::Pixels))
        } else {
            (value, None)
        }
    }
}

/// A signed font size delta such as `+2pt` or `-1px`.
///
/// # Example
///
/// ```rust
/// use skin_property::RelativeFontSize;
///
/// assert!(RelativeFontSize::is_relative("+2pt"));
/// assert!(!RelativeFontSize::is_relative("10pt"));
///
/// let smaller = RelativeFontSize::parse("-1pt").unwrap();
/// assert_eq!(smaller.delta(), -1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelativeFontSize {
    delta: i32,
}

impl RelativeFontSize {
    /// Returns `true` if `value` is written as a relative size (leading sign).
    #[must_use]
    pub fn is_relative(value: &str) -> bool {
        Sign::split(value).is_some()
    }

    /// Parses a signed size, with an optional `pt`/`px` suffix.
    pub fn parse(value: &str) -> Result<Self, ValueParseError> {
        let error = || ValueParseError::new(ValueKind::RelativeFontSize, value);
        let (sign, rest) = Sign::split(value).ok_or_else(error)?;
        let (number, _) = FontSizeUnit::split(rest);
        let magnitude: i32 = number.parse().map_err(|_| error())?;
        Ok(Self {
            delta: sign.apply(magnitude),
        })
    }

    /// Returns the signed delta.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> i32 {
        self.delta
    }
}

/// An integral font size in points or pixels, such as `10pt`.
///
/// # Example
///
/// ```rust
/// use skin_property::AbsoluteFontSize;
///
/// let size = AbsoluteFontSize::parse("10pt").unwrap();
/// assert_eq!(size.offset(1).to_string(), "11pt");
///
/// // Keywords are not integral sizes.
/// assert!(AbsoluteFontSize::parse("small").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbsoluteFontSize {
    size: i32,
    unit: FontSizeUnit,
}

impl AbsoluteFontSize {
    /// Parses an integral size with an optional `pt`/`px` suffix.
    ///
    /// A size without a suffix is taken to be in points.
    pub fn parse(value: &str) -> Result<Self, ValueParseError> {
        let (number, unit) = FontSizeUnit::split(value);
        let size = number
            .parse()
            .map_err(|_| ValueParseError::new(ValueKind::AbsoluteFontSize, value))?;
        Ok(Self {
            size,
            unit: unit.unwrap_or_default(),
        })
    }

    /// Returns the integral size.
    #[must_use]
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Returns the unit.
    #[must_use]
    #[inline]
    pub const fn unit(self) -> FontSizeUnit {
        self.unit
    }

    /// Returns this size shifted by `delta`, keeping the unit.
    #[must_use]
    pub const fn offset(self, delta: i32) -> Self {
        Self {
            size: self.size.saturating_add(delta),
            unit: self.unit,
        }
    }
}

impl fmt::Display for AbsoluteFontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.size, self.unit.suffix())
    }
}
