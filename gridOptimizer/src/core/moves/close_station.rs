use rand::Rng;
use tracing::debug;
use crate::config::constants::MIN_OPEN_STATIONS_FOR_CLOSE;
use crate::core::moves::{provisional_reassign, random_open_station};
use crate::core::neighborhood::{MoveOutcome, RejectReason};
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;

/// Closes a random open station and hands each of its turbines to the
/// nearest station left open. Never closes the last open station.
pub fn close_station<R: Rng>(state: &mut SearchState, rng: &mut R) -> Result<MoveOutcome, WindGridError> {
    if state.solution.open_count() < MIN_OPEN_STATIONS_FOR_CLOSE {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    }
    let Some(site) = random_open_station(state, rng) else {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    };

    let snapshot = state.clone();
    let curtailing_cost = state.instance().get_parameters().curtailing_cost;
    let mut delta = state.solution.station_capital_cost(site);
    let turbines = state.solution.turbines_of(site);
    state.solution.close_station(site);

    // The closed row keeps its pre-move losses until the first transfer
    // refreshes it, so the per-turbine deltas telescope to the full change.
    for &turbine in &turbines {
        let Some(target) = state.solution.nearest_open_station(turbine) else {
            *state = snapshot;
            return Err(WindGridError::InvariantViolation(format!(
                "no open station left for turbine {} after closing {}", turbine, site
            )));
        };
        delta += provisional_reassign(state, turbine, site, target);
        state.solution.assign_turbine(turbine, target);
    }

    let stale_loss = state.ledger.station_loss(site);
    state.ledger.refresh_station(&state.solution, site);
    delta += curtailing_cost * (stale_loss - state.ledger.station_loss(site));

    if delta > 0.0 {
        debug!("Closed station {} moving {} turbines, delta {:.3}", site, turbines.len(), delta);
        return Ok(MoveOutcome::Accepted { delta });
    }

    *state = snapshot;
    Ok(MoveOutcome::Rejected(RejectReason::NoImprovement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solution::Solution;
    use crate::models::test_fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_closes_the_only_open_station() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![None, Some(0)], vec![None, Some(0)], vec![1, 1, 1]);
        let mut state = SearchState::new(solution);
        let before = state.clone();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = close_station(&mut state, &mut rng).unwrap();
            assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn closing_either_station_pays_off() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        let state = SearchState::new(solution);
        let before = state.objective();

        // Closing B reclaims 200 against 8 extra wiring and 50 of curtailment.
        // Closing A reclaims 100 against 14 extra wiring and the same 50.
        for seed in 0..20 {
            let mut trial = state.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = close_station(&mut trial, &mut rng).unwrap();
            trial.verify().unwrap();

            let MoveOutcome::Accepted { delta } = outcome else {
                panic!("closing a station should pay off, got {:?}", outcome);
            };
            if trial.solution().is_open(0) {
                assert_eq!(delta, 142.0);
                assert_eq!(trial.solution().assignment(), &[0, 0, 0]);
            } else {
                assert_eq!(delta, 36.0);
                assert_eq!(trial.solution().assignment(), &[1, 1, 1]);
            }
            assert_eq!(trial.solution().open_count(), 1);
            assert!((before - trial.objective() - delta).abs() < 1e-9);
        }
    }
}
