// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute and relative colors.

use core::fmt;

use csscolorparser::Color;

use crate::error::{ValueKind, ValueParseError};
use crate::sign::Sign;

/// An opaque 8-bit RGB color.
///
/// Parsing accepts any CSS color (hex forms, named colors, functional
/// notations); alpha is discarded. Display always yields `#rrggbb`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a CSS color value.
    pub fn parse(value: &str) -> Result<Self, ValueParseError> {
        let color: Color = value
            .trim()
            .parse()
            .map_err(|_| ValueParseError::new(ValueKind::Color, value))?;
        let [red, green, blue, _] = color.to_rgba8();
        Ok(Self { red, green, blue })
    }

    /// Channel-wise addition, clamped at 255.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            red: self.red.saturating_add(other.red),
            green: self.green.saturating_add(other.green),
            blue: self.blue.saturating_add(other.blue),
        }
    }

    /// Channel-wise subtraction, clamped at 0.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            red: self.red.saturating_sub(other.red),
            green: self.green.saturating_sub(other.green),
            blue: self.blue.saturating_sub(other.blue),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// A signed color delta such as `+#202020` or `-#111`.
///
/// Applying a relative color adds or subtracts the delta channel-wise and
/// clamps each channel to `[0, 255]`.
///
/// # Example
///
/// ```rust
/// use skin_property::{RelativeColor, Rgb};
///
/// let darker = RelativeColor::parse("-#202020").unwrap();
/// let base = Rgb::parse("#0f0f0f").unwrap();
/// assert_eq!(darker.apply(base), Rgb::new(0, 0, 0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelativeColor {
    sign: Sign,
    delta: Rgb,
}

impl RelativeColor {
    /// Returns `true` if `value` is written as a relative color:
    /// a sign followed by `#RRGGBB` or `#RGB`.
    #[must_use]
    pub fn is_relative(value: &str) -> bool {
        matches!(value.len(), 5 | 8)
            && Sign::split(value).is_some_and(|(_, rest)| rest.starts_with('#'))
    }

    /// Parses a relative color.
    pub fn parse(value: &str) -> Result<Self, ValueParseError> {
        let error = || ValueParseError::new(ValueKind::RelativeColor, value);
        if !Self::is_relative(value) {
            return Err(error());
        }
        let (sign, hex) = Sign::split(value).ok_or_else(error)?;
        let delta = Rgb::parse(hex).map_err(|_| error())?;
        Ok(Self { sign, delta })
    }

    /// Returns the sign of the adjustment.
    #[must_use]
    #[inline]
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// Returns the unsigned delta.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> Rgb {
        self.delta
    }

    /// Applies the adjustment to an absolute color.
    #[must_use]
    pub const fn apply(self, base: Rgb) -> Rgb {
        match self.sign {
            Sign::Plus => base.saturating_add(self.delta),
            Sign::Minus => base.saturating_sub(self.delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rgb_parses_hex_and_names() {
        assert_eq!(Rgb::parse("#f0f0f0"), Ok(Rgb::new(0xf0, 0xf0, 0xf0)));
        assert_eq!(Rgb::parse("#fff"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse("red"), Ok(Rgb::new(255, 0, 0)));
        assert!(Rgb::parse("not-a-color").is_err());
    }

    #[test]
    fn rgb_displays_as_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn relative_color_shape() {
        assert!(RelativeColor::is_relative("+#202020"));
        assert!(RelativeColor::is_relative("-#123"));
        assert!(!RelativeColor::is_relative("#202020"));
        assert!(!RelativeColor::is_relative("+#2020"));
        assert!(!RelativeColor::is_relative("+2pt"));
    }

    #[test]
    fn relative_color_clamps() {
        let lighter = RelativeColor::parse("+#202020").unwrap();
        assert_eq!(lighter.apply(Rgb::new(0xf0, 0xf0, 0xf0)).to_string(), "#ffffff");

        let darker = RelativeColor::parse("-#202020").unwrap();
        assert_eq!(darker.apply(Rgb::new(0x0f, 0x0f, 0x0f)).to_string(), "#000000");
    }

    #[test]
    fn relative_color_short_form() {
        let delta = RelativeColor::parse("+#111").unwrap();
        assert_eq!(delta.sign(), Sign::Plus);
        assert_eq!(delta.delta(), Rgb::new(0x11, 0x11, 0x11));
    }

    #[test]
    fn malformed_relative_color_is_an_error() {
        let err = RelativeColor::parse("+#zzzzzz").unwrap_err();
        assert_eq!(err.kind, ValueKind::RelativeColor);
    }
}
