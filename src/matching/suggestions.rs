// src/matching/suggestions.rs
//! Turns uncovered high-weight requirements into actionable gap annotations.

use crate::types::{Category, RequirementHit, Suggestion};

/// One suggestion per missing term, in the order the scorer ranked them
/// (category rank, then weight descending). Pure derivation, no I/O.
pub fn suggest(missing: &[RequirementHit]) -> Vec<Suggestion> {
    missing
        .iter()
        .map(|hit| Suggestion {
            term: hit.term.clone(),
            category: hit.category,
            rationale: rationale(&hit.term, hit.category),
        })
        .collect()
}

fn rationale(term: &str, category: Category) -> String {
    match category {
        Category::MustHave => {
            format!("Add evidence of {term}; it is a required qualification")
        }
        Category::Certification => {
            format!("List the {term} certification if you hold it; postings screen for it")
        }
        Category::NiceToHave => {
            format!("Mention {term} if applicable; it strengthens an otherwise qualified profile")
        }
        Category::SoftSkill => {
            format!("Show {term} through a concrete achievement rather than a plain skill list")
        }
    }
}
