use chrono::Utc;
use tracing::info;

pub mod config;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod matching;
pub mod types;

pub use config::EngineConfig;
pub use dictionary::SkillDictionary;
pub use error::EngineError;
pub use matching::CategoryWeights;
pub use types::{Category, MatchResult, ProfileEntry, RequirementSet, Suggestion};

use dictionary::PhraseTable;
use matching::{Normalizer, ProfileIndex, RequirementExtractor};

/// Matching & scoring engine: a pure function of (posting text, profile
/// snapshot) -> MatchResult.
///
/// The dictionary and synonym table are canonicalized once at construction
/// and never mutated, so one engine can serve concurrent calls; no state is
/// retained between calls.
pub struct MatchEngine {
    config: EngineConfig,
    normalizer: Normalizer,
    phrases: PhraseTable,
}

impl MatchEngine {
    /// Engine with the built-in domain dictionary.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_dictionary(config, SkillDictionary::built_in())
    }

    /// Engine with a caller-supplied dictionary (e.g. loaded from TOML).
    pub fn with_dictionary(config: EngineConfig, dictionary: SkillDictionary) -> Self {
        let normalizer = Normalizer::new(dictionary.synonyms());
        let phrases = PhraseTable::build(&dictionary, &normalizer);
        Self {
            config,
            normalizer,
            phrases,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one match: extract requirements, score coverage, select bullets
    /// within `budget`, derive suggestions for the gaps.
    ///
    /// Degenerate inputs (empty posting, empty profile) produce degenerate
    /// but valid results; the only error is a zero budget.
    pub fn analyze(
        &self,
        posting: &str,
        profile: &[ProfileEntry],
        budget: u32,
    ) -> Result<MatchResult, EngineError> {
        let extractor = RequirementExtractor::new(&self.normalizer, &self.phrases, &self.config);
        let requirements = extractor.extract(posting);
        let index = ProfileIndex::build(profile, &self.normalizer, &self.phrases);

        let coverage = matching::score(
            &requirements,
            &index,
            &self.config.category_weights,
            &self.phrases,
        );
        let selected_bullets = matching::select(&requirements, &index, budget)?;
        let suggestions = matching::suggest(&coverage.missing);

        info!(
            score = coverage.score,
            matched = coverage.matched.len(),
            missing = coverage.missing.len(),
            selected = selected_bullets.len(),
            "match analysis complete"
        );

        Ok(MatchResult {
            score: coverage.score,
            matched: coverage.matched,
            missing: coverage.missing,
            selected_bullets,
            suggestions,
            generated_at: Utc::now(),
        })
    }
}

/// Convenience for one-off matches with default config and the built-in
/// dictionary.
pub fn match_posting(
    posting: &str,
    profile: &[ProfileEntry],
    budget: u32,
) -> Result<MatchResult, EngineError> {
    MatchEngine::new(EngineConfig::default()).analyze(posting, profile, budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(term: &str) -> ProfileEntry {
        ProfileEntry::Skill {
            term: term.to_string(),
        }
    }

    fn bullet(text: &str, terms: &[&str]) -> ProfileEntry {
        ProfileEntry::Bullet {
            text: text.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            cost: 1,
        }
    }

    #[test]
    fn test_synonym_posting_matches_canonical_profile_skill() {
        let result =
            match_posting("Required: AI experience", &[skill("artificial intelligence")], 3)
                .unwrap();

        let matched: Vec<&str> = result.matched.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(matched, vec!["artificial intelligence"]);
        assert!(result.missing.is_empty());
        assert!(result.score > 0);
    }

    #[test]
    fn test_empty_posting_yields_score_zero() {
        let result = match_posting("", &[skill("python")], 3).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert!(result.selected_bullets.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_empty_profile_yields_score_zero_with_gaps() {
        let result = match_posting("Required: Python", &[], 3).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_suggestion_count_matches_missing_count() {
        let posting = "Requirements:\n- Python\n- Docker\n- PMP\nNice to have:\n- Tableau";
        let result = match_posting(posting, &[skill("python")], 3).unwrap();
        assert_eq!(result.suggestions.len(), result.missing.len());
        assert!(!result.missing.is_empty());
    }

    #[test]
    fn test_selected_bullets_cover_posting_terms() {
        let posting = "Requirements:\n- Machine learning\n- Docker";
        let profile = vec![
            bullet("Shipped ML pipelines", &["machine learning"]),
            bullet("Organised the holiday party", &[]),
            bullet("Containerised services", &["docker"]),
        ];
        let result = match_posting(posting, &profile, 2).unwrap();
        assert_eq!(result.selected_bullets.len(), 2);
        // Only must_have terms appear in the posting, so only that
        // category's 0.5 share is earnable.
        assert_eq!(result.score, 50);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_zero_budget_error_propagates() {
        let err = match_posting("Required: Python", &[skill("python")], 0).unwrap_err();
        assert_eq!(err, EngineError::InvalidBudget(0));
    }

    #[test]
    fn test_repeated_analysis_is_deterministic() {
        let engine = MatchEngine::new(EngineConfig::default());
        let posting = "Requirements:\n- Python\n- Kubernetes\nPreferred:\n- Tableau";
        let profile = vec![
            skill("python"),
            bullet("Ran k8s clusters", &["kubernetes"]),
            bullet("Built dashboards", &["tableau"]),
        ];

        let a = engine.analyze(posting, &profile, 4).unwrap();
        let b = engine.analyze(posting, &profile, 4).unwrap();

        assert_eq!(a.score, b.score);
        assert_eq!(a.matched, b.matched);
        assert_eq!(a.missing, b.missing);
        assert_eq!(a.selected_bullets, b.selected_bullets);
        assert_eq!(a.suggestions, b.suggestions);
    }

    #[test]
    fn test_score_bounds_on_arbitrary_input() {
        let posting = "Python python PYTHON\nRequired: python\n- Python";
        let result = match_posting(posting, &[skill("python")], 1).unwrap();
        assert!(result.score <= 100);
    }
}
