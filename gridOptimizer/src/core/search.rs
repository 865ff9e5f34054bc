use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::config::constants::OBJECTIVE_TOLERANCE;
use crate::config::search_config::SearchConfig;
use crate::core::moves::apply_move;
use crate::core::neighborhood::{MoveOutcome, Neighborhood};
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodStats {
    pub neighborhood: Neighborhood,
    pub attempted: usize,
    pub accepted: usize,
    pub total_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub initial_objective: f64,
    pub final_objective: f64,
    pub iterations: usize,
    pub exhausted_neighborhoods: bool, // Stopped because the last neighborhood failed out
    pub neighborhoods: Vec<NeighborhoodStats>,
}

impl SearchReport {
    pub fn accepted_moves(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.accepted).sum()
    }

    pub fn stats_for(&self, neighborhood: Neighborhood) -> Option<&NeighborhoodStats> {
        self.neighborhoods.iter().find(|n| n.neighborhood == neighborhood)
    }
}

/// Escalating-neighborhood hill climbing over `state`.
///
/// A success keeps the current neighborhood; `failure_threshold` consecutive
/// failures advance to the next one in `neighborhood_order`. The run stops
/// when the iteration budget is spent or the last neighborhood fails out.
/// Only strictly improving moves are ever applied.
pub fn run_local_search<R: Rng>(
    state: &mut SearchState,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchReport, WindGridError> {
    let _timing = logging::start_timing("run_local_search", OperationCategory::Search);
    config.validate()?;

    let order = &config.neighborhood_order;
    let mut stats: Vec<NeighborhoodStats> = order
        .iter()
        .map(|&neighborhood| NeighborhoodStats {
            neighborhood,
            attempted: 0,
            accepted: 0,
            total_gain: 0.0,
        })
        .collect();

    let initial_objective = state.objective();
    let mut current_objective = initial_objective;
    let mut k = 0;
    let mut failures = 0;
    let mut iterations = 0;

    while iterations < config.max_iterations && k < order.len() {
        iterations += 1;
        let neighborhood = order[k];
        let before = config.check_invariants.then(|| state.clone());

        let outcome = apply_move(state, neighborhood, config, rng)?;
        stats[k].attempted += 1;

        if let Some(before) = before {
            check_transition(state, &before, outcome, current_objective)?;
        }

        match outcome {
            MoveOutcome::Accepted { delta } => {
                stats[k].accepted += 1;
                stats[k].total_gain += delta;
                current_objective -= delta;
                failures = 0;
            }
            MoveOutcome::Rejected(_) => {
                failures += 1;
                if failures >= config.failure_threshold {
                    debug!("{} failed {} times in a row, escalating", neighborhood, failures);
                    k += 1;
                    failures = 0;
                }
            }
        }
    }

    let final_objective = state.objective();
    info!(
        "Local search finished after {} iterations: objective {:.3} -> {:.3}",
        iterations, initial_objective, final_objective
    );

    Ok(SearchReport {
        initial_objective,
        final_objective,
        iterations,
        exhausted_neighborhoods: k >= order.len(),
        neighborhoods: stats,
    })
}

fn check_transition(
    state: &SearchState,
    before: &SearchState,
    outcome: MoveOutcome,
    previous_objective: f64,
) -> Result<(), WindGridError> {
    state.verify()?;
    match outcome {
        MoveOutcome::Rejected(_) if state != before => Err(WindGridError::InvariantViolation(
            "rejected move modified the solution or ledger".to_string(),
        )),
        MoveOutcome::Accepted { .. } => {
            let objective = state.objective();
            let slack = OBJECTIVE_TOLERANCE * previous_objective.abs().max(1.0);
            if objective > before.objective() + slack {
                return Err(WindGridError::InvariantViolation(format!(
                    "accepted move worsened the objective from {:.6} to {:.6}",
                    before.objective(), objective
                )));
            }
            Ok(())
        }
        MoveOutcome::Rejected(_) => Ok(()),
    }
}
