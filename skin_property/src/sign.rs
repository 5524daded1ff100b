// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading sign of a relative value.

/// Direction of a relative adjustment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+`: increase.
    Plus,
    /// `-`: decrease.
    Minus,
}

impl Sign {
    /// Splits a leading `+`/`-` off `value`.
    ///
    /// Returns `None` if `value` does not start with a sign.
    #[must_use]
    pub fn split(value: &str) -> Option<(Self, &str)> {
        if let Some(rest) = value.strip_prefix('+') {
            Some((Self::Plus, rest))
        } else {
            value.strip_prefix('-').map(|rest| (Self::Minus, rest))
        }
    }

    /// Applies the sign to a magnitude.
    #[must_use]
    #[inline]
    pub const fn apply(self, magnitude: i32) -> i32 {
        match self {
            Self::Plus => magnitude,
            Self::Minus => magnitude.wrapping_neg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_recognizes_both_signs() {
        assert_eq!(Sign::split("+2pt"), Some((Sign::Plus, "2pt")));
        assert_eq!(Sign::split("-#fff"), Some((Sign::Minus, "#fff")));
        assert_eq!(Sign::split("10pt"), None);
        assert_eq!(Sign::split(""), None);
    }

    #[test]
    fn apply_negates_for_minus() {
        assert_eq!(Sign::Plus.apply(3), 3);
        assert_eq!(Sign::Minus.apply(3), -3);
    }
}
