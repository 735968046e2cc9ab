// src/matching/scorer.rs
//! Fit scoring: per-category coverage of extracted requirements, combined
//! through fixed category weights into a 0-100 score.

use crate::dictionary::PhraseTable;
use crate::matching::profile_index::ProfileIndex;
use crate::types::{Category, RequirementHit, RequirementSet};

/// Fixed share each requirement category contributes to the final score.
///
/// A category with zero total weight in the posting contributes 0 and its
/// share is NOT redistributed. That keeps scores comparable across postings
/// and is an explicit scoring policy, not an oversight.
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    pub must_have: f64,
    pub certification: f64,
    pub nice_to_have: f64,
    pub soft_skill: f64,
}

impl CategoryWeights {
    pub const DEFAULT: Self = Self {
        must_have: 0.5,
        certification: 0.2,
        nice_to_have: 0.2,
        soft_skill: 0.1,
    };

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::MustHave => self.must_have,
            Category::Certification => self.certification,
            Category::NiceToHave => self.nice_to_have,
            Category::SoftSkill => self.soft_skill,
        }
    }

    pub fn sum(&self) -> f64 {
        self.must_have + self.certification + self.nice_to_have + self.soft_skill
    }
}

/// Output of one scoring pass.
#[derive(Debug, Clone)]
pub struct Coverage {
    pub score: u8,
    pub matched: Vec<RequirementHit>,
    pub missing: Vec<RequirementHit>,
}

const ALL_CATEGORIES: [Category; 4] = [
    Category::MustHave,
    Category::Certification,
    Category::NiceToHave,
    Category::SoftSkill,
];

/// Score a requirement set against the profile index. Synonym resolution has
/// already happened upstream, so membership in `covered_terms()` is plain
/// canonical-key equality.
pub fn score(
    requirements: &RequirementSet,
    index: &ProfileIndex,
    weights: &CategoryWeights,
    phrases: &PhraseTable,
) -> Coverage {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut total_by_cat = [0.0f64; 4];
    let mut matched_by_cat = [0.0f64; 4];

    for (term, requirement) in requirements.iter() {
        let slot = requirement.category.rank() as usize;
        total_by_cat[slot] += requirement.weight;

        let hit = RequirementHit {
            term: phrases.display(term),
            category: requirement.category,
            weight: requirement.weight,
        };
        if index.covers(term) {
            matched_by_cat[slot] += requirement.weight;
            matched.push(hit);
        } else {
            missing.push(hit);
        }
    }

    let mut weighted = 0.0;
    for category in ALL_CATEGORIES {
        let slot = category.rank() as usize;
        if total_by_cat[slot] > 0.0 {
            weighted += weights.weight(category) * (matched_by_cat[slot] / total_by_cat[slot]);
        }
    }

    let score = (100.0 * weighted).round().clamp(0.0, 100.0) as u8;

    order_hits(&mut matched);
    order_hits(&mut missing);

    Coverage {
        score,
        matched,
        missing,
    }
}

/// Category rank first, then weight descending, then term; highest-impact
/// gaps come first and the order is fully deterministic.
fn order_hits(hits: &mut [RequirementHit]) {
    hits.sort_by(|a, b| {
        a.category
            .rank()
            .cmp(&b.category.rank())
            .then(b.weight.total_cmp(&a.weight))
            .then(a.term.cmp(&b.term))
    });
}
