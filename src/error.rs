// src/error.rs
use thiserror::Error;

/// Errors surfaced by the matching engine.
///
/// The surface is deliberately narrow: malformed or empty postings and
/// profiles produce degenerate but valid results, not errors. The only
/// failure is a caller-programming error on the selection budget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("selection budget must be positive, got {0}")]
    InvalidBudget(u32),
}
