// src/matching/mod.rs
//! The matching pipeline: Normalizer -> Requirement Extractor ->
//! {Scorer, Selector} -> Suggestion Generator.

pub mod extractor;
pub mod normalizer;
pub mod profile_index;
pub mod scorer;
pub mod selector;
pub mod suggestions;

pub use extractor::RequirementExtractor;
pub use normalizer::Normalizer;
pub use profile_index::ProfileIndex;
pub use scorer::{score, CategoryWeights, Coverage};
pub use selector::select;
pub use suggestions::suggest;
