// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Agent versions with wildcard segments.

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Segment {
    Number(u32),
    Wildcard,
}

/// A dotted version such as `10`, `9.0.2`, or `3.*`.
///
/// A `*` segment matches any value. Missing trailing segments compare as `0`,
/// unless the version ends in `*`, in which case they compare as wildcards:
/// `3.*` matches `3.6.1`, while `3` equals `3.0.0` but not `3.6`.
///
/// Because wildcard comparison is not transitive, `Version` does not
/// implement `Ord`; use [`compare`](Self::compare).
///
/// # Example
///
/// ```rust
/// use skin_cascade::Version;
///
/// let pattern: Version = "3.*".parse().unwrap();
/// assert!(pattern.matches(&"3.6.1".parse().unwrap()));
/// assert!(!pattern.matches(&"4.0".parse().unwrap()));
/// assert_eq!(pattern.to_minimum().to_string(), "3.0");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Version {
    segments: SmallVec<[Segment; 4]>,
}

impl Version {
    /// Parses a dotted version string.
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let mut segments = SmallVec::new();
        for part in input.trim().split('.') {
            let segment = match part {
                "*" => Segment::Wildcard,
                _ if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) => {
                    Segment::Number(part.parse().map_err(|_| VersionParseError::new(input))?)
                }
                _ => return Err(VersionParseError::new(input)),
            };
            segments.push(segment);
        }
        Ok(Self { segments })
    }

    /// Returns a concrete version from plain numbers.
    #[must_use]
    pub fn from_numbers(numbers: &[u32]) -> Self {
        Self {
            segments: numbers.iter().copied().map(Segment::Number).collect(),
        }
    }

    /// Returns `true` if any segment is `*`.
    #[must_use]
    pub fn has_wildcards(&self) -> bool {
        self.segments.contains(&Segment::Wildcard)
    }

    /// Replaces every wildcard with `0`, yielding the smallest concrete match.
    #[must_use]
    pub fn to_minimum(&self) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|segment| match segment {
                    Segment::Wildcard => Segment::Number(0),
                    number => *number,
                })
                .collect(),
        }
    }

    fn padding(&self) -> Segment {
        match self.segments.last() {
            Some(Segment::Wildcard) => Segment::Wildcard,
            _ => Segment::Number(0),
        }
    }

    /// Compares segment-wise, treating wildcards as equal to anything.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        let (pad, other_pad) = (self.padding(), other.padding());
        for index in 0..len {
            let a = self.segments.get(index).copied().unwrap_or(pad);
            let b = other.segments.get(index).copied().unwrap_or(other_pad);
            match (a, b) {
                (Segment::Number(a), Segment::Number(b)) if a != b => return a.cmp(&b),
                _ => {}
            }
        }
        Ordering::Equal
    }

    /// Returns `true` if the two versions compare equal.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({self})")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            match segment {
                Segment::Number(n) => write!(f, "{n}")?,
                Segment::Wildcard => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

/// An inclusive version range; either end may be open.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{Version, VersionRange};
///
/// let range = VersionRange::between("8".parse().unwrap(), "10.*".parse().unwrap());
/// assert!(range.contains(&"9.5".parse().unwrap()));
/// assert!(range.contains(&"10.3".parse().unwrap()));
/// assert!(!range.contains(&Version::from_numbers(&[11])));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VersionRange {
    min: Option<Version>,
    max: Option<Version>,
}

impl VersionRange {
    /// Matches every version.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Matches versions equal to `version` (wildcards honored).
    #[must_use]
    pub fn exactly(version: Version) -> Self {
        Self {
            min: Some(version.clone()),
            max: Some(version),
        }
    }

    /// Matches `min` and later.
    #[must_use]
    pub fn at_least(min: Version) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Matches `max` and earlier.
    #[must_use]
    pub fn at_most(max: Version) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Matches `min` through `max`, inclusive.
    #[must_use]
    pub fn between(min: Version, max: Version) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> Option<&Version> {
        self.min.as_ref()
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> Option<&Version> {
        self.max.as_ref()
    }

    /// Returns `true` if `version` lies within the range.
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        self.min
            .as_ref()
            .is_none_or(|min| min.compare(version) != Ordering::Greater)
            && self
                .max
                .as_ref()
                .is_none_or(|max| max.compare(version) != Ordering::Less)
    }
}

/// Error returned when a version string is not a dotted list of numbers
/// and `*` wildcards.
#[derive(Clone, PartialEq, Eq)]
pub struct VersionParseError {
    /// The rejected input.
    pub input: Box<str>,
}

impl VersionParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl fmt::Debug for VersionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionParseError {{ input: {:?} }}", self.input)
    }
}

impl fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid version `{}`", self.input)
    }
}

impl core::error::Error for VersionParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(v("9.0.2").to_string(), "9.0.2");
        assert_eq!(v("3.*").to_string(), "3.*");
        assert!(v("3.*").has_wildcards());
        assert!(Version::parse("").is_err());
        assert!(Version::parse("1..2").is_err());
        assert!(Version::parse("1.x").is_err());
        assert!(Version::parse("-1").is_err());
    }

    #[test]
    fn missing_segments_pad_with_zero() {
        assert!(v("3").matches(&v("3.0.0")));
        assert!(!v("3").matches(&v("3.6")));
        assert_eq!(v("3").compare(&v("3.6")), Ordering::Less);
        assert_eq!(v("10").compare(&v("9.9")), Ordering::Greater);
    }

    #[test]
    fn trailing_wildcard_pads_with_wildcards() {
        assert!(v("3.*").matches(&v("3")));
        assert!(v("3.*").matches(&v("3.6.1")));
        assert!(v("*").matches(&v("42.1")));
        assert_eq!(v("3.*").compare(&v("4.0")), Ordering::Less);
    }

    #[test]
    fn inner_wildcard() {
        assert!(v("1.*.3").matches(&v("1.9.3")));
        assert!(!v("1.*.3").matches(&v("1.9.4")));
    }

    #[test]
    fn minimum_version() {
        assert_eq!(v("2.*.*").to_minimum(), v("2.0.0"));
        assert!(!v("2.*.*").to_minimum().has_wildcards());
    }

    #[test]
    fn ranges() {
        assert!(VersionRange::any().contains(&v("1")));
        assert!(VersionRange::at_least(v("9")).contains(&v("9.0.1")));
        assert!(!VersionRange::at_least(v("9")).contains(&v("8.9")));
        assert!(VersionRange::at_most(v("9.*")).contains(&v("9.9")));
        assert!(!VersionRange::at_most(v("9")).contains(&v("9.1")));
        assert!(VersionRange::exactly(v("7.*")).contains(&v("7.2")));
    }

    #[test]
    fn error_message() {
        let err = Version::parse("1.beta").unwrap_err();
        assert_eq!(err.to_string(), "invalid version `1.beta`");
    }
}
