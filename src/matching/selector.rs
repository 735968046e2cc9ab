// src/matching/selector.rs
//! Length-bounded bullet selection: greedy marginal-gain approximation of
//! the budgeted weighted set-cover problem.

use crate::error::EngineError;
use crate::matching::profile_index::{IndexedBullet, ProfileIndex};
use crate::types::{ProfileEntry, RequirementSet, Term};
use std::collections::BTreeSet;

// Tolerance for treating two floating-point gains as tied.
const EPS: f64 = 1e-9;

/// Choose an ordered subset of experience bullets maximizing the summed
/// weight of distinct requirement terms covered, subject to total display
/// cost <= `budget`.
///
/// Greedy marginal-gain-per-cost, the documented approximation of the
/// exact (NP-hard) problem. Ties break on (a) higher total covered weight,
/// (b) earlier original profile position, so output is deterministic.
/// Output order is selection order: highest marginal contribution first.
pub fn select(
    requirements: &RequirementSet,
    index: &ProfileIndex,
    budget: u32,
) -> Result<Vec<ProfileEntry>, EngineError> {
    if budget == 0 {
        return Err(EngineError::InvalidBudget(budget));
    }

    let bullets = index.bullets();
    let mut selected_positions: BTreeSet<usize> = BTreeSet::new();
    let mut covered: BTreeSet<Term> = BTreeSet::new();
    let mut remaining = budget;
    let mut selection = Vec::new();

    loop {
        let mut best: Option<(usize, f64, f64)> = None;

        for (i, bullet) in bullets.iter().enumerate() {
            if selected_positions.contains(&i) || bullet.cost > remaining {
                continue;
            }
            let marginal = marginal_gain(bullet, requirements, &covered);
            if marginal <= 0.0 {
                continue;
            }
            let ratio = marginal / bullet.cost as f64;
            let total = total_covered_weight(bullet, requirements);

            let better = match best {
                None => true,
                Some((_, best_ratio, best_total)) => {
                    ratio > best_ratio + EPS
                        || ((ratio - best_ratio).abs() <= EPS && total > best_total + EPS)
                }
            };
            if better {
                best = Some((i, ratio, total));
            }
        }

        let Some((winner, _, _)) = best else {
            break;
        };
        let bullet = &bullets[winner];
        selected_positions.insert(winner);
        remaining -= bullet.cost;
        for term in &bullet.terms {
            if requirements.get(term).is_some() {
                covered.insert(term.clone());
            }
        }
        selection.push(bullet.entry.clone());
    }

    Ok(selection)
}

/// Weight of requirement terms this bullet would newly cover.
fn marginal_gain(
    bullet: &IndexedBullet,
    requirements: &RequirementSet,
    covered: &BTreeSet<Term>,
) -> f64 {
    bullet
        .terms
        .iter()
        .filter(|term| !covered.contains(*term))
        .filter_map(|term| requirements.get(term))
        .map(|req| req.weight)
        .sum()
}

/// Weight of all requirement terms the bullet covers, already-covered or not.
fn total_covered_weight(bullet: &IndexedBullet, requirements: &RequirementSet) -> f64 {
    bullet
        .terms
        .iter()
        .filter_map(|term| requirements.get(term))
        .map(|req| req.weight)
        .sum()
}
