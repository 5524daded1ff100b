// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value parsing errors.

use alloc::boxed::Box;
use core::fmt;

/// The micro-grammar a [`ValueParseError`] was raised for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A signed font size such as `+2pt`.
    RelativeFontSize,
    /// An unsigned font size such as `10pt`.
    AbsoluteFontSize,
    /// A color such as `#f0f0f0` or `red`.
    Color,
    /// A signed color such as `+#202020`.
    RelativeColor,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RelativeFontSize => "relative font size",
            Self::AbsoluteFontSize => "font size",
            Self::Color => "color",
            Self::RelativeColor => "relative color",
        })
    }
}

/// Error returned when a property value does not match the expected grammar.
#[derive(Clone, PartialEq, Eq)]
pub struct ValueParseError {
    /// The grammar that rejected the value.
    pub kind: ValueKind,
    /// The rejected input.
    pub value: Box<str>,
}

impl ValueParseError {
    pub(crate) fn new(kind: ValueKind, value: &str) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Debug for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValueParseError {{ kind: {:?}, value: {:?} }}",
            self.kind, self.value
        )
    }
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value `{}`", self.kind, self.value)
    }
}

impl core::error::Error for ValueParseError {}
