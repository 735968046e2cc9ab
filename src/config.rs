// src/config.rs
use crate::matching::scorer::CategoryWeights;

/// Tuning knobs for one engine instance. Plain data, captured at
/// construction; a `MatchEngine` never mutates its config.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Multiplier applied to terms found on heading/requirement lines.
    pub heading_multiplier: f64,
    /// Base weight for single tokens admitted on qualifying context alone,
    /// relative to the 1.0 base of dictionary matches.
    pub context_confidence: f64,
    /// Fixed per-category weights used by the scorer.
    pub category_weights: CategoryWeights,
    /// Selection budget used when the caller does not pass one explicitly.
    pub default_budget: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            heading_multiplier: 2.0,
            context_confidence: 0.5,
            category_weights: CategoryWeights::DEFAULT,
            default_budget: 6,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heading_multiplier(mut self, multiplier: f64) -> Self {
        self.heading_multiplier = multiplier;
        self
    }

    pub fn with_context_confidence(mut self, confidence: f64) -> Self {
        self.context_confidence = confidence;
        self
    }

    pub fn with_category_weights(mut self, weights: CategoryWeights) -> Self {
        self.category_weights = weights;
        self
    }

    pub fn with_default_budget(mut self, budget: u32) -> Self {
        self.default_budget = budget;
        self
    }
}
