use rand::Rng;
use tracing::trace;
use crate::core::moves::provisional_reassign;
use crate::core::neighborhood::{MoveOutcome, RejectReason};
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;

/// Moves one random turbine to the first open station, in index order, that
/// strictly lowers the objective. Only the drawn turbine is examined.
pub fn reassign_turbine<R: Rng>(state: &mut SearchState, rng: &mut R) -> Result<MoveOutcome, WindGridError> {
    let instance = state.instance();
    if instance.turbine_count() == 0 || state.solution.open_count() < 2 {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    }

    let turbine = rng.gen_range(0..instance.turbine_count());
    let current = state.solution.assigned_station(turbine);
    if !state.solution.is_open(current) {
        return Err(WindGridError::InvariantViolation(format!(
            "turbine {} is served by closed station {}", turbine, current
        )));
    }

    for candidate in 0..instance.station_count() {
        if candidate == current || !state.solution.is_open(candidate) {
            continue;
        }

        let delta = provisional_reassign(state, turbine, current, candidate);
        if delta > 0.0 {
            state.solution.assign_turbine(turbine, candidate);
            trace!("Turbine {} moved {} -> {} (delta {:.3})", turbine, current, candidate, delta);
            return Ok(MoveOutcome::Accepted { delta });
        }
        state.ledger.move_turbine(&state.solution, candidate, current);
    }

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
    fn overflowing_reassignment_is_rejected_and_state_unchanged() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        let mut state = SearchState::new(solution);
        let before = state.clone();

        // Every turbine is already on its nearest station; any move costs wiring,
        // and moving turbine 3 onto A also overflows A by one unit.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = reassign_turbine(&mut state, &mut rng).unwrap();
            assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::NoImprovement));
            assert_eq!(state, before);
        }
        assert_eq!(state.ledger().power_received(0), &[4.0]);
        assert_eq!(state.ledger().losses_in_stat(0), &[0.0]);
    }

    #[test]
    fn overloaded_station_sheds_a_turbine() {
        let instance = test_fixtures::two_station_instance();
        // All three turbines on A overflow it by one unit; shedding any of them
        // to B saves 50 of curtailment for at most 8 of extra wiring.
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 0]);
        let mut state = SearchState::new(solution);
        let before = state.objective();

        let mut accepted = false;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            if reassign_turbine(&mut state, &mut rng).unwrap().is_accepted() {
                accepted = true;
                break;
            }
        }

        assert!(accepted);
        assert_eq!(state.solution().turbines_of(1).len(), 1);
        assert_eq!(state.ledger().total_loss(), 0.0);
        assert!(state.objective() < before);
        assert!(state.verify().is_ok());
    }

    #[test]
    fn single_open_station_has_nowhere_to_go() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), None], vec![Some(0), None], vec![0, 0, 0]);
        let mut state = SearchState::new(solution);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            reassign_turbine(&mut state, &mut rng).unwrap(),
            MoveOutcome::Rejected(RejectReason::PreconditionUnmet)
        );
    }
}
