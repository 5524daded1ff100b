// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query context: who is asking for styles.

use alloc::sync::Arc;
use core::fmt;

use crate::version::Version;

/// A language with an optional region, such as `en` or `en_US`.
///
/// The language is stored lowercase and the region uppercase, so `en-us`,
/// `en_US`, and `EN_us` are the same locale.
///
/// # Example
///
/// ```rust
/// use skin_cascade::Locale;
///
/// let locale = Locale::parse("en-us").unwrap();
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.region(), Some("US"));
/// assert_eq!(locale, Locale::parse("en_US").unwrap());
/// assert!(Locale::parse("").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Arc<str>,
    region: Option<Arc<str>>,
}

impl Locale {
    /// Creates a language-only locale.
    #[must_use]
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase().into(),
            region: None,
        }
    }

    /// Returns this locale with a region.
    #[must_use]
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_ascii_uppercase().into());
        self
    }

    /// Parses `ll`, `ll_RR`, or `ll-RR`.
    ///
    /// Anything after the region (variants, scripts) is ignored. Returns
    /// `None` if the language is empty.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let mut parts = tag.trim().split(['_', '-']);
        let language = parts.next().filter(|language| !language.is_empty())?;
        let locale = Self::new(language);
        Some(match parts.next().filter(|region| !region.is_empty()) {
            Some(region) => locale.with_region(region),
            None => locale,
        })
    }

    /// Returns the lowercase language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the uppercase region code, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns `true` if both locales share a language.
    #[must_use]
    pub fn same_language(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locale({self})")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        Ok(())
    }
}

/// Reading direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Rendering mode of the client.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderingMode {
    /// Standards-compliant rendering.
    #[default]
    Standard,
    /// Legacy quirks rendering.
    Quirks,
}

bitflags::bitflags! {
    /// Accessibility preferences of the user.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AccessibilityProfile: u8 {
        /// High contrast colors.
        const HIGH_CONTRAST = 0b0000_0001;
        /// Enlarged fonts.
        const LARGE_FONTS   = 0b0000_0010;
    }
}

/// The client application (browser family) and its version.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Agent {
    application: Arc<str>,
    version: Version,
}

impl Agent {
    /// Creates an agent.
    #[must_use]
    pub fn new(application: impl Into<Arc<str>>, version: Version) -> Self {
        Self {
            application: application.into(),
            version,
        }
    }

    /// Returns the application name, e.g. `gecko`.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the version.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }
}

/// Everything about the client that decides which sheet fragments apply.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{AccessibilityProfile, Agent, Direction, Locale, StyleContext, Version};
///
/// let context = StyleContext::new()
///     .with_locale(Locale::parse("fr_CA").unwrap())
///     .with_direction(Direction::Ltr)
///     .with_agent(Agent::new("gecko", Version::from_numbers(&[115])))
///     .with_accessibility(AccessibilityProfile::HIGH_CONTRAST);
/// assert_eq!(context.locale().map(|l| l.language()), Some("fr"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleContext {
    locale: Option<Locale>,
    direction: Direction,
    agent: Option<Agent>,
    mode: RenderingMode,
    accessibility: AccessibilityProfile,
}

impl StyleContext {
    /// Creates a context with no locale, no agent, and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the agent.
    #[must_use]
    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Sets the rendering mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RenderingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the accessibility profile.
    #[must_use]
    pub fn with_accessibility(mut self, accessibility: AccessibilityProfile) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Returns the locale, if known.
    #[must_use]
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Returns the reading direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the agent, if known.
    #[must_use]
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    /// Returns the rendering mode.
    #[must_use]
    pub fn mode(&self) -> RenderingMode {
        self.mode
    }

    /// Returns the accessibility profile.
    #[must_use]
    pub fn accessibility(&self) -> AccessibilityProfile {
        self.accessibility
    }
}
