use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::info;
use crate::config::search_config::SearchConfig;
use crate::core::initial_solution::build_initial_solution;
use crate::core::search::{run_local_search, SearchReport};
use crate::core::solution::Solution;
use crate::core::state::SearchState;
use crate::models::instance::Instance;
use crate::utils::errors::WindGridError;
use crate::utils::logging::{self, OperationCategory};

/// Best restart of a multi-start run.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub restart: usize,
    pub seed: u64,
    pub initial: Solution<'a>,
    pub state: SearchState<'a>,
    pub report: SearchReport,
}

fn restart_seed(base_seed: u64, restart: usize) -> u64 {
    base_seed.wrapping_add(restart as u64)
}

fn run_restart<'a>(
    instance: &'a Instance,
    config: &SearchConfig,
    restart: usize,
    seed: u64,
) -> Result<SearchOutcome<'a>, WindGridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let initial = build_initial_solution(instance, &mut rng)?;
    let mut state = SearchState::new(initial.clone());
    if config.check_invariants {
        state.verify()?;
    }
    let report = run_local_search(&mut state, config, &mut rng)?;
    Ok(SearchOutcome {
        restart,
        seed,
        initial,
        state,
        report,
    })
}

/// Runs `config.restarts` independent searches and keeps the cheapest final
/// state. Each restart owns its solution, ledger and RNG, so restarts may run
/// on the rayon pool when `config.parallel` is set.
pub fn run_multi_start<'a>(instance: &'a Instance, config: &SearchConfig) -> Result<SearchOutcome<'a>, WindGridError> {
    let _timing = logging::start_timing("run_multi_start", OperationCategory::Search);
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Starting {} restart(s) from base seed {}", config.restarts, base_seed);

    let outcomes: Vec<SearchOutcome<'a>> = if config.parallel && config.restarts > 1 {
        (0..config.restarts)
            .into_par_iter()
            .map(|restart| run_restart(instance, config, restart, restart_seed(base_seed, restart)))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let progress = ProgressBar::new(config.restarts as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} restarts {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        let mut outcomes = Vec::with_capacity(config.restarts);
        for restart in 0..config.restarts {
            let outcome = run_restart(instance, config, restart, restart_seed(base_seed, restart))?;
            progress.set_message(format!("objective {:.2}", outcome.report.final_objective));
            progress.inc(1);
            outcomes.push(outcome);
        }
        progress.finish_and_clear();
        outcomes
    };

    outcomes
        .into_iter()
        .min_by(|a, b| a.report.final_objective.total_cmp(&b.report.final_objective))
        .ok_or_else(|| WindGridError::InvalidConfig("no restart was run".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures;

    #[test]
    fn seeded_runs_are_reproducible() {
        let instance = test_fixtures::line_instance();
        let config = SearchConfig {
            seed: Some(42),
            restarts: 3,
            max_iterations: 500,
            ..SearchConfig::default()
        };
        let first = run_multi_start(&instance, &config).unwrap();
        let second = run_multi_start(&instance, &config).unwrap();

        assert_eq!(first.restart, second.restart);
        assert_eq!(first.state, second.state);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn parallel_restarts_pick_the_same_winner() {
        let instance = test_fixtures::line_instance();
        let sequential = SearchConfig {
            seed: Some(7),
            restarts: 4,
            max_iterations: 500,
            check_invariants: true,
            ..SearchConfig::default()
        };
        let parallel = SearchConfig {
            parallel: true,
            ..sequential.clone()
        };

        let a = run_multi_start(&instance, &sequential).unwrap();
        let b = run_multi_start(&instance, &parallel).unwrap();
        assert_eq!(a.report.final_objective, b.report.final_objective);
        assert_eq!(a.state, b.state);
        assert!(a.report.final_objective <= a.report.initial_objective);
    }
}
