// src/matching/extractor.rs
//! Scans normalized posting text into a weighted, categorized RequirementSet.

use crate::config::EngineConfig;
use crate::dictionary::PhraseTable;
use crate::matching::normalizer::Normalizer;
use crate::types::{Category, RequirementSet};
use tracing::debug;

/// Tokens that may introduce a lower-confidence requirement term, e.g.
/// "experience in Kafka" admits "kafka" even when it is not in the
/// dictionary.
const CONTEXT_CUES: &[&str] = &[
    "experience",
    "proficiency",
    "expertise",
    "knowledge",
    "familiarity",
];

/// Connectors allowed between a cue and the admitted token.
const CONNECTORS: &[&str] = &["in", "with", "of", "using"];

/// Never admitted as requirement terms on context alone.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "with", "to", "for", "on", "at", "is", "are", "as",
    "our", "your", "you", "we", "be", "will", "have", "year", "plus", "strong",
];

/// Section language that switches the default category for general skills.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SectionContext {
    Required,
    Preferred,
}

pub struct RequirementExtractor<'a> {
    normalizer: &'a Normalizer,
    phrases: &'a PhraseTable,
    config: &'a EngineConfig,
}

impl<'a> RequirementExtractor<'a> {
    pub fn new(
        normalizer: &'a Normalizer,
        phrases: &'a PhraseTable,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            normalizer,
            phrases,
            config,
        }
    }

    /// Extract the weighted requirement set from free posting text. An empty
    /// posting yields an empty set; this never fails.
    pub fn extract(&self, posting: &str) -> RequirementSet {
        let mut set = RequirementSet::new();
        let mut context = SectionContext::Required;
        let mut line_count = 0usize;

        for raw_line in posting.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            line_count += 1;

            if let Some(cue) = section_cue(line) {
                context = cue;
            }

            let multiplier = if is_heading_line(line) {
                self.config.heading_multiplier
            } else {
                1.0
            };

            self.scan_line(line, context, multiplier, &mut set);
        }

        debug!(
            terms = set.len(),
            lines = line_count,
            "extracted posting requirements"
        );
        set
    }

    fn scan_line(
        &self,
        line: &str,
        context: SectionContext,
        multiplier: f64,
        set: &mut RequirementSet,
    ) {
        let tokens = self.normalizer.normalize(line);
        let mut i = 0;

        while i < tokens.len() {
            if let Some((consumed, key, info)) = self.phrases.match_at(&tokens, i) {
                let category = apply_context(info.category, context);
                set.add(key, multiplier, category);
                i += consumed;
                continue;
            }

            if self.admit_on_context(&tokens, i) {
                let category = match context {
                    SectionContext::Required => Category::MustHave,
                    SectionContext::Preferred => Category::NiceToHave,
                };
                set.add(
                    tokens[i].clone(),
                    self.config.context_confidence * multiplier,
                    category,
                );
            }
            i += 1;
        }
    }

    /// A single unknown token qualifies when preceded by a cue, optionally
    /// through one connector: "proficiency with X", "experience in X".
    fn admit_on_context(&self, tokens: &[String], i: usize) -> bool {
        let token = tokens[i].as_str();
        if token.len() < 3 || STOPWORDS.contains(&token) || CONTEXT_CUES.contains(&token) {
            return false;
        }

        let prev = match i.checked_sub(1).map(|p| tokens[p].as_str()) {
            Some(prev) => prev,
            None => return false,
        };
        if CONTEXT_CUES.contains(&prev) {
            return true;
        }
        if CONNECTORS.contains(&prev) && i >= 2 {
            return CONTEXT_CUES.contains(&tokens[i - 2].as_str());
        }
        false
    }
}

/// Dictionary categories are fixed for certifications and soft skills; only
/// general skills follow the posting's section language.
fn apply_context(dictionary_category: Category, context: SectionContext) -> Category {
    match (dictionary_category, context) {
        (Category::MustHave, SectionContext::Preferred) => Category::NiceToHave,
        (category, _) => category,
    }
}

fn section_cue(line: &str) -> Option<SectionContext> {
    let lower = line.to_lowercase();
    if lower.contains("nice to have")
        || lower.contains("preferred")
        || lower.contains("bonus")
        || lower.contains("a plus")
    {
        return Some(SectionContext::Preferred);
    }
    if lower.contains("must have")
        || lower.contains("required")
        || lower.contains("requirement")
        || lower.contains("qualification")
    {
        return Some(SectionContext::Required);
    }
    None
}

/// Heading/requirement lines get the positional weight boost: bullet lines,
/// short lines without a terminal period, and title-case lines.
fn is_heading_line(line: &str) -> bool {
    if line.starts_with('-') || line.starts_with('*') || line.starts_with('•') {
        return true;
    }
    if line.chars().count() <= 48 && !line.ends_with('.') {
        return true;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    !words.is_empty()
        && words.len() <= 8
        && words.iter().all(|w| {
            w.chars()
                .next()
                .map(|c| !c.is_alphabetic() || c.is_uppercase())
                .unwrap_or(true)
        })
}
