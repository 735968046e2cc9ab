// src/matching/profile_index.rs
//! Queryable, read-only view of a candidate profile: which canonical terms
//! the profile covers and which entries cover them.

use crate::dictionary::PhraseTable;
use crate::matching::normalizer::Normalizer;
use crate::types::{ProfileEntry, Term};
use std::collections::{BTreeMap, BTreeSet};

/// An experience bullet admitted for selection: its covered terms, display
/// cost and original profile position. Bullets covering no term are dropped
/// at build time and never reach the selector.
#[derive(Debug, Clone)]
pub struct IndexedBullet {
    pub entry: ProfileEntry,
    pub terms: BTreeSet<Term>,
    pub cost: u32,
    pub position: usize,
}

/// Built once per profile snapshot, read-only afterwards. BTree-backed so a
/// rebuild from an unchanged profile yields an identical mapping.
pub struct ProfileIndex {
    entries: Vec<ProfileEntry>,
    covered: BTreeSet<Term>,
    by_term: BTreeMap<Term, Vec<usize>>,
    bullets: Vec<IndexedBullet>,
}

impl ProfileIndex {
    pub fn build(
        profile: &[ProfileEntry],
        normalizer: &Normalizer,
        phrases: &PhraseTable,
    ) -> Self {
        let mut covered = BTreeSet::new();
        let mut by_term: BTreeMap<Term, Vec<usize>> = BTreeMap::new();
        let mut bullets = Vec::new();

        for (position, entry) in profile.iter().enumerate() {
            let terms = entry_terms(entry, normalizer, phrases);
            if terms.is_empty() {
                continue;
            }

            for term in &terms {
                covered.insert(term.clone());
                by_term.entry(term.clone()).or_default().push(position);
            }

            if let ProfileEntry::Bullet { cost, .. } = entry {
                bullets.push(IndexedBullet {
                    entry: entry.clone(),
                    terms,
                    cost: (*cost).max(1),
                    position,
                });
            }
        }

        Self {
            entries: profile.to_vec(),
            covered,
            by_term,
            bullets,
        }
    }

    /// All canonical terms the profile covers, in stable order.
    pub fn covered_terms(&self) -> &BTreeSet<Term> {
        &self.covered
    }

    pub fn covers(&self, term: &str) -> bool {
        self.covered.contains(term)
    }

    /// Profile entries covering one term, in original profile order.
    pub fn entries_covering(&self, term: &str) -> Vec<&ProfileEntry> {
        self.by_term
            .get(term)
            .map(|positions| positions.iter().map(|&p| &self.entries[p]).collect())
            .unwrap_or_default()
    }

    /// Experience bullets eligible for selection.
    pub fn bullets(&self) -> &[IndexedBullet] {
        &self.bullets
    }
}

/// Canonical terms contributed by one profile entry. Skills and
/// certifications contribute their own term; bullets contribute their
/// explicit tags, or terms derived from the bullet text when untagged.
fn entry_terms(
    entry: &ProfileEntry,
    normalizer: &Normalizer,
    phrases: &PhraseTable,
) -> BTreeSet<Term> {
    match entry {
        ProfileEntry::Skill { term } | ProfileEntry::Certification { term } => {
            let key = normalizer.canonical_phrase(term);
            if key.is_empty() {
                BTreeSet::new()
            } else {
                BTreeSet::from([key])
            }
        }
        ProfileEntry::Bullet { text, terms, .. } => {
            if terms.is_empty() {
                phrases
                    .matches_in(&normalizer.normalize(text))
                    .into_iter()
                    .map(|(key, _)| key)
                    .collect()
            } else {
                terms
                    .iter()
                    .map(|t| normalizer.canonical_phrase(t))
                    .filter(|key| !key.is_empty())
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SkillDictionary;

    fn fixture() -> (Normalizer, PhraseTable) {
        let dictionary = SkillDictionary::built_in();
        let normalizer = Normalizer::new(dictionary.synonyms());
        let phrases = PhraseTable::build(&dictionary, &normalizer);
        (normalizer, phrases)
    }

    fn skill(term: &str) -> ProfileEntry {
        ProfileEntry::Skill {
            term: term.to_string(),
        }
    }

    fn bullet(text: &str, terms: &[&str], cost: u32) -> ProfileEntry {
        ProfileEntry::Bullet {
            text: text.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            cost,
        }
    }

    #[test]
    fn test_skills_and_certifications_cover_their_term() {
        let (normalizer, phrases) = fixture();
        let profile = vec![
            skill("Project Management"),
            ProfileEntry::Certification {
                term: "PMP".to_string(),
            },
        ];
        let index = ProfileIndex::build(&profile, &normalizer, &phrases);

        assert!(index.covers(&normalizer.canonical_phrase("project management")));
        assert!(index.covers(&normalizer.canonical_phrase("pmp")));
        assert_eq!(index.bullets().len(), 0);
    }

    #[test]
    fn test_untagged_bullet_derives_terms_from_text() {
        let (normalizer, phrases) = fixture();
        let profile = vec![bullet(
            "Deployed machine learning models on AWS for clinical teams",
            &[],
            1,
        )];
        let index = ProfileIndex::build(&profile, &normalizer, &phrases);

        assert!(index.covers(&normalizer.canonical_phrase("machine learning")));
        assert!(index.covers(&normalizer.canonical_phrase("aws")));
        assert_eq!(index.bullets().len(), 1);
    }

    #[test]
    fn test_bullet_without_any_term_is_excluded() {
        let (normalizer, phrases) = fixture();
        let profile = vec![bullet("Worked hard every single day", &[], 1)];
        let index = ProfileIndex::build(&profile, &normalizer, &phrases);

        assert!(index.covered_terms().is_empty());
        assert!(index.bullets().is_empty());
    }

    #[test]
    fn test_entries_covering_preserves_profile_order() {
        let (normalizer, phrases) = fixture();
        let profile = vec![
            bullet("Scaled agile delivery", &["agile"], 1),
            skill("agile"),
        ];
        let index = ProfileIndex::build(&profile, &normalizer, &phrases);

        let key = normalizer.canonical_phrase("agile");
        let covering = index.entries_covering(&key);
        assert_eq!(covering.len(), 2);
        assert_eq!(covering[0], &profile[0]);
        assert_eq!(covering[1], &profile[1]);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let (normalizer, phrases) = fixture();
        let profile = vec![
            skill("docker"),
            skill("kubernetes"),
            bullet("Led SAP rollout", &["sap", "change management"], 2),
        ];
        let a = ProfileIndex::build(&profile, &normalizer, &phrases);
        let b = ProfileIndex::build(&profile, &normalizer, &phrases);

        assert_eq!(a.covered_terms(), b.covered_terms());
        let terms_a: Vec<_> = a.bullets().iter().map(|x| x.terms.clone()).collect();
        let terms_b: Vec<_> = b.bullets().iter().map(|x| x.terms.clone()).collect();
        assert_eq!(terms_a, terms_b);
    }

    #[test]
    fn test_zero_cost_bullet_clamped_to_one() {
        let (normalizer, phrases) = fixture();
        let profile = vec![bullet("Agile coaching", &["agile"], 0)];
        let index = ProfileIndex::build(&profile, &normalizer, &phrases);
        assert_eq!(index.bullets()[0].cost, 1);
    }
}
