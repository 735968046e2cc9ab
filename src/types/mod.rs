// src/types/mod.rs
pub mod match_data;

pub use match_data::{
    Category, MatchResult, ProfileEntry, Requirement, RequirementHit, RequirementSet, Suggestion,
    Term,
};
