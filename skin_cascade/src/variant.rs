// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet applicability conditions and their specificity.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::context::{AccessibilityProfile, Direction, Locale, RenderingMode, StyleContext};
use crate::version::VersionRange;

/// How well a sheet fragment matches a query context.
///
/// Higher specificity sheets are merged later and therefore win.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32);

const EXACT_LOCALE: u32 = 1 << 6;
const LANGUAGE: u32 = 1 << 5;
const DIRECTION: u32 = 1 << 4;
const AGENT_VERSION: u32 = 1 << 3;
const AGENT_APPLICATION: u32 = 1 << 2;
const ACCESSIBILITY: u32 = 1 << 1;
const MODE: u32 = 1;

/// An agent constraint: one application, optionally limited to version ranges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AgentMatch {
    application: Arc<str>,
    versions: Vec<VersionRange>,
}

impl AgentMatch {
    /// Matches every version of `application`.
    #[must_use]
    pub fn new(application: impl Into<Arc<str>>) -> Self {
        Self {
            application: application.into(),
            versions: Vec::new(),
        }
    }

    /// Restricts the match to versions inside `range`.
    ///
    /// With several ranges, a version inside any one of them matches.
    #[must_use]
    pub fn version_range(mut self, range: VersionRange) -> Self {
        self.versions.push(range);
        self
    }

    /// Returns the application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the accepted version ranges; empty means any version.
    #[must_use]
    pub fn versions(&self) -> &[VersionRange] {
        &self.versions
    }

    fn score(&self, context: &StyleContext) -> Option<u32> {
        let agent = context.agent()?;
        if agent.application() != &*self.application {
            return None;
        }
        if self.versions.is_empty() {
            return Some(AGENT_APPLICATION);
        }
        self.versions
            .iter()
            .any(|range| range.contains(agent.version()))
            .then_some(AGENT_APPLICATION | AGENT_VERSION)
    }
}

/// The applicability predicate of a sheet fragment.
///
/// Every constraint is optional. A sheet with no constraints applies to every
/// context with [`Specificity`] zero. If any constraint is violated the sheet
/// does not apply. Each satisfied constraint adds a fixed weight, ranked
/// exact locale, language-only locale, direction, agent version, agent
/// application, accessibility, mode.
///
/// # Example
///
/// ```rust
/// use skin_cascade::{Direction, Locale, SheetVariants, StyleContext};
///
/// let rtl = SheetVariants::new().direction(Direction::Rtl);
/// let hebrew = SheetVariants::new().locale(Locale::new("he"));
///
/// let context = StyleContext::new()
///     .with_locale(Locale::parse("he_IL").unwrap())
///     .with_direction(Direction::Rtl);
///
/// assert!(hebrew.match_score(&context) > rtl.match_score(&context));
/// assert!(rtl.match_score(&StyleContext::new()).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SheetVariants {
    locales: Vec<Locale>,
    direction: Option<Direction>,
    agents: Vec<AgentMatch>,
    mode: Option<RenderingMode>,
    accessibility: AccessibilityProfile,
}

impl SheetVariants {
    /// Returns unconstrained variants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an accepted locale. A locale without a region accepts every
    /// region of its language.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locales.push(locale);
        self
    }

    /// Requires a reading direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Adds an accepted agent.
    #[must_use]
    pub fn agent(mut self, agent: AgentMatch) -> Self {
        self.agents.push(agent);
        self
    }

    /// Requires a rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: RenderingMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Requires every flag in `profile`.
    #[must_use]
    pub fn accessibility(mut self, profile: AccessibilityProfile) -> Self {
        self.accessibility = profile;
        self
    }

    /// Returns `true` if no constraint is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }

    /// Scores these variants against `context`.
    ///
    /// Returns `None` if the sheet does not apply.
    #[must_use]
    pub fn match_score(&self, context: &StyleContext) -> Option<Specificity> {
        let mut score = 0;

        if !self.locales.is_empty() {
            let wanted = context.locale()?;
            score |= self
                .locales
                .iter()
                .filter_map(|locale| locale_score(locale, wanted))
                .max()?;
        }

        if let Some(direction) = self.direction {
            if direction != context.direction() {
                return None;
            }
            score |= DIRECTION;
        }

        if !self.agents.is_empty() {
            score |= self
                .agents
                .iter()
                .filter_map(|agent| agent.score(context))
                .max()?;
        }

        if !self.accessibility.is_empty() {
            if !context.accessibility().contains(self.accessibility) {
                return None;
            }
            score |= ACCESSIBILITY;
        }

        if let Some(mode) = self.mode {
            if mode != context.mode() {
                return None;
            }
            score |= MODE;
        }

        Some(Specificity(score))
    }
}

fn locale_score(locale: &Locale, wanted: &Locale) -> Option<u32> {
    if !locale.same_language(wanted) {
        return None;
    }
    match locale.region() {
        None => Some(LANGUAGE),
        Some(region) if wanted.region() == Some(region) => Some(EXACT_LOCALE),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Agent;
    use crate::version::Version;

    fn gecko(version: &[u32]) -> StyleContext {
        StyleContext::new().with_agent(Agent::new("gecko", Version::from_numbers(version)))
    }

    #[test]
    fn unconstrained_matches_everything_at_zero() {
        let variants = SheetVariants::new();
        assert!(variants.is_unconstrained());
        assert_eq!(variants.match_score(&StyleContext::new()), Some(Specificity(0)));
        assert_eq!(variants.match_score(&gecko(&[1])), Some(Specificity(0)));
    }

    #[test]
    fn exact_locale_outranks_language() {
        let context = StyleContext::new().with_locale(Locale::parse("en_GB").unwrap());
        let language = SheetVariants::new().locale(Locale::new("en"));
        let exact = SheetVariants::new().locale(Locale::new("en").with_region("GB"));
        let other = SheetVariants::new().locale(Locale::new("en").with_region("US"));

        assert!(exact.match_score(&context) > language.match_score(&context));
        assert!(other.match_score(&context).is_none());
        assert!(language.match_score(&StyleContext::new()).is_none());
    }

    #[test]
    fn agent_version_outranks_application() {
        let any_version = SheetVariants::new().agent(AgentMatch::new("gecko"));
        let ranged = SheetVariants::new()
            .agent(AgentMatch::new("gecko").version_range(VersionRange::at_least(Version::from_numbers(&[100]))));

        assert!(ranged.match_score(&gecko(&[115])) > any_version.match_score(&gecko(&[115])));
        assert!(ranged.match_score(&gecko(&[90])).is_none());
        assert!(
            SheetVariants::new()
                .agent(AgentMatch::new("webkit"))
                .match_score(&gecko(&[115]))
                .is_none()
        );
    }

    #[test]
    fn weights_are_ranked() {
        let context = StyleContext::new()
            .with_locale(Locale::parse("en").unwrap())
            .with_direction(Direction::Rtl)
            .with_mode(RenderingMode::Quirks)
            .with_accessibility(AccessibilityProfile::all())
            .with_agent(Agent::new("gecko", Version::from_numbers(&[1])));

        let direction_only = SheetVariants::new().direction(Direction::Rtl);
        let everything_below = SheetVariants::new()
            .agent(AgentMatch::new("gecko").version_range(VersionRange::any()))
            .accessibility(AccessibilityProfile::LARGE_FONTS)
            .mode(RenderingMode::Quirks);
        assert!(direction_only.match_score(&context) > everything_below.match_score(&context));

        let language = SheetVariants::new().locale(Locale::new("en"));
        let all_but_locale = everything_below.clone().direction(Direction::Rtl);
        assert!(language.match_score(&context) > all_but_locale.match_score(&context));
    }

    #[test]
    fn accessibility_requires_every_flag() {
        let variants = SheetVariants::new()
            .accessibility(AccessibilityProfile::HIGH_CONTRAST | AccessibilityProfile::LARGE_FONTS);
        let partial = StyleContext::new().with_accessibility(AccessibilityProfile::HIGH_CONTRAST);
        assert!(variants.match_score(&partial).is_none());
    }
}
