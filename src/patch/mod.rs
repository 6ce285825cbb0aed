//! Tiered find/replace over an in-memory document
//!
//! A [`Patcher`] holds an ordered list of [`Tier`]s. Each tier is tried in
//! turn and the first one whose pattern occurs in the document does the
//! replacement; later tiers are never consulted. Nothing in this module
//! touches the filesystem.

mod fuzzy;

use regex::{NoExpand, Regex};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

use crate::error::{PatchError, Result};

pub use fuzzy::whitespace_tolerant;

/// What to look for in the document
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact substring
    Literal(String),
    /// Regular expression, possibly with capture groups
    Regex(Regex),
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(PatchError::invalid_pattern(text, "literal pattern is empty"));
        }
        Ok(Self::Literal(text))
    }

    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self::Regex)
            .map_err(|e| PatchError::invalid_pattern(source, e))
    }

    /// Regex built from `text` that tolerates whitespace drift, see [`whitespace_tolerant`]
    pub fn fuzzy(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(PatchError::invalid_pattern(text, "fuzzy pattern is blank"));
        }
        Self::regex(&whitespace_tolerant(text))
    }

    /// Number of non-overlapping occurrences in `document`
    pub fn count_matches(&self, document: &str) -> usize {
        match self {
            Self::Literal(text) => document.matches(text.as_str()).count(),
            Self::Regex(re) => re.find_iter(document).count(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{}", text),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// What to put in place of a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted verbatim, `$` is never expanded
    Literal(String),
    /// Expanded against regex captures (`$1`, `${name}`); verbatim for literal patterns
    Template(String),
}

impl Replacement {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Template(text) => text,
        }
    }
}

/// One candidate strategy in the fallback sequence
#[derive(Debug, Clone)]
pub struct Tier {
    pub label: String,
    pub pattern: Pattern,
    pub replacement: Replacement,
}

impl Tier {
    pub fn new(label: impl Into<String>, pattern: Pattern, replacement: Replacement) -> Self {
        Self {
            label: label.into(),
            pattern,
            replacement,
        }
    }

    /// Replace the first `limit` occurrences of the pattern
    fn replace(&self, document: &str, limit: usize) -> String {
        match (&self.pattern, &self.replacement) {
            (Pattern::Literal(text), replacement) => {
                document.replacen(text.as_str(), replacement.as_str(), limit)
            }
            (Pattern::Regex(re), Replacement::Literal(text)) => {
                re.replacen(document, limit, NoExpand(text.as_str())).into_owned()
            }
            (Pattern::Regex(re), Replacement::Template(template)) => {
                re.replacen(document, limit, template.as_str()).into_owned()
            }
        }
    }
}

/// How many occurrences a matching tier may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    /// Exactly one match is required, more than one is reported as ambiguous
    #[default]
    Unique,
    /// Replace the first match only
    First,
    /// Replace every match
    All,
}

/// The tier that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHit {
    pub index: usize,
    pub label: String,
}

impl TierHit {
    /// True when an earlier, stricter tier missed
    pub fn is_fallback(&self) -> bool {
        self.index > 0
    }
}

/// Result of one patch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied {
        tier: TierHit,
        replaced: usize,
        document: String,
    },
    /// A tier matched but the replacement left the text identical
    Unchanged { tier: TierHit },
    /// Occurrence policy was `Unique` and the tier matched several times
    Ambiguous { tier: TierHit, count: usize },
    NotFound { tiers_tried: usize },
}

impl Outcome {
    pub fn used_fallback(&self) -> bool {
        self.tier().map(TierHit::is_fallback).unwrap_or(false)
    }

    pub fn tier(&self) -> Option<&TierHit> {
        match self {
            Self::Applied { tier, .. } | Self::Unchanged { tier } | Self::Ambiguous { tier, .. } => {
                Some(tier)
            }
            Self::NotFound { .. } => None,
        }
    }

    /// The patched document, if anything was applied
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::Applied { document, .. } => Some(document),
            _ => None,
        }
    }
}

/// Ordered list of tiers plus the occurrence policy
#[derive(Debug, Clone)]
pub struct Patcher {
    tiers: Vec<Tier>,
    occurrence: Occurrence,
}

impl Patcher {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self {
            tiers,
            occurrence: Occurrence::default(),
        }
    }

    pub fn with_occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn occurrence(&self) -> Occurrence {
        self.occurrence
    }

    /// Try each tier in order, stopping at the first one that matches
    pub fn apply(&self, document: &str) -> Outcome {
        for (index, tier) in self.tiers.iter().enumerate() {
            let count = tier.pattern.count_matches(document);
            debug!(
                "Tier {} ({}) {} matched {} time(s)",
                index, tier.label, tier.pattern, count
            );

            if count == 0 {
                continue;
            }

            let hit = TierHit {
                index,
                label: tier.label.clone(),
            };

            let limit = match self.occurrence {
                Occurrence::Unique if count > 1 => {
                    // Never fall through to a looser tier on ambiguity.
                    warn!(
                        "Tier {} matched {} times but a unique match is required",
                        tier.label, count
                    );
                    return Outcome::Ambiguous { tier: hit, count };
                }
                Occurrence::Unique | Occurrence::First => 1,
                Occurrence::All => count,
            };

            let patched = tier.replace(document, limit);
            if patched == document {
                return Outcome::Unchanged { tier: hit };
            }

            return Outcome::Applied {
                tier: hit,
                replaced: limit,
                document: patched,
            };
        }

        Outcome::NotFound {
            tiers_tried: self.tiers.len(),
        }
    }
}
