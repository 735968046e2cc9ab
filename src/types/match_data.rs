// src/types/match_data.rs
//! Core data structures for posting/profile matching

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical normalized skill/requirement phrase. Identity is the string
/// produced by the Normalizer, so synonym variants collapse to one Term.
pub type Term = String;

/// Requirement category extracted from a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MustHave,
    Certification,
    NiceToHave,
    SoftSkill,
}

impl Category {
    /// Ordering rank used when listing gaps: higher-impact categories first.
    pub fn rank(self) -> u8 {
        match self {
            Category::MustHave => 0,
            Category::Certification => 1,
            Category::NiceToHave => 2,
            Category::SoftSkill => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::MustHave => "must-have",
            Category::Certification => "certification",
            Category::NiceToHave => "nice-to-have",
            Category::SoftSkill => "soft skill",
        }
    }
}

/// Weight and category attached to one extracted Term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub weight: f64,
    pub category: Category,
}

/// Weighted, categorized terms extracted from one job posting.
///
/// Keyed by canonical term so duplicate mentions accumulate weight instead
/// of creating duplicate entries. BTreeMap keeps iteration order stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    terms: BTreeMap<Term, Requirement>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add weight for a term. The first mention fixes the category;
    /// later mentions only accumulate weight.
    pub fn add(&mut self, term: Term, weight: f64, category: Category) {
        if weight <= 0.0 {
            return;
        }
        self.terms
            .entry(term)
            .and_modify(|req| req.weight += weight)
            .or_insert(Requirement { weight, category });
    }

    pub fn get(&self, term: &str) -> Option<&Requirement> {
        self.terms.get(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Requirement)> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of weights for one category across the whole set.
    pub fn category_weight(&self, category: Category) -> f64 {
        self.terms
            .values()
            .filter(|req| req.category == category)
            .map(|req| req.weight)
            .sum()
    }
}

/// One unit of candidate content supplied by the profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileEntry {
    Skill { term: String },
    Certification { term: String },
    /// Free-text experience bullet. `terms` may be empty, in which case the
    /// Profile Index derives covered terms from the text. `cost` is the
    /// display budget consumed when the bullet is selected.
    Bullet {
        text: String,
        #[serde(default)]
        terms: Vec<String>,
        #[serde(default = "default_cost")]
        cost: u32,
    },
}

fn default_cost() -> u32 {
    1
}

/// One matched or missing requirement, carried into the MatchResult with
/// its display form, category and accumulated weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementHit {
    pub term: Term,
    pub category: Category,
    pub weight: f64,
}

/// Human-readable gap annotation derived from one uncovered requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub term: Term,
    pub category: Category,
    pub rationale: String,
}

/// Immutable output of one match operation. A re-run builds a new value;
/// nothing here is patched after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub matched: Vec<RequirementHit>,
    pub missing: Vec<RequirementHit>,
    pub selected_bullets: Vec<ProfileEntry>,
    pub suggestions: Vec<Suggestion>,
    pub generated_at: DateTime<Utc>,
}
