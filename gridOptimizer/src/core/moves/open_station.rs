use rand::Rng;
use tracing::debug;
use crate::core::moves::provisional_reassign;
use crate::core::neighborhood::{MoveOutcome, RejectReason};
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;

/// Opens a random closed site with random equipment and pulls over every
/// turbine that is individually better served there. Refused once
/// `max_open_fraction` of the sites are open.
pub fn open_station<R: Rng>(
    state: &mut SearchState,
    max_open_fraction: f64,
    rng: &mut R,
) -> Result<MoveOutcome, WindGridError> {
    let instance = state.instance();
    let stations = instance.station_count();
    if state.solution.open_count() as f64 >= max_open_fraction * stations as f64 {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    }

    let closed: Vec<usize> = (0..stations).filter(|&s| !state.solution.is_open(s)).collect();
    if closed.is_empty() {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    }
    let site = closed[rng.gen_range(0..closed.len())];
    let station_type = rng.gen_range(0..instance.get_substation_types().len());
    let land_cable = rng.gen_range(0..instance.get_land_cables().len());

    let snapshot = state.ledger.clone();
    state.solution.open_station(site, station_type, land_cable);
    state.ledger.refresh_station(&state.solution, site);

    let mut delta = -state.solution.station_capital_cost(site);
    let mut queued = Vec::new();
    for turbine in 0..instance.turbine_count() {
        let from = state.solution.assigned_station(turbine);
        let gain = provisional_reassign(state, turbine, from, site);
        if gain > 0.0 {
            delta += gain;
            queued.push(turbine);
        } else {
            state.ledger.move_turbine(&state.solution, site, from);
        }
    }

    if delta > 0.0 {
        for &turbine in &queued {
            state.solution.assign_turbine(turbine, site);
        }
        debug!("Opened station {} (type {}, cable {}) taking {} turbines, delta {:.3}",
            site, station_type, land_cable, queued.len(), delta);
        return Ok(MoveOutcome::Accepted { delta });
    }

    state.solution.close_station(site);
    state.ledger = snapshot;
    Ok(MoveOutcome::Rejected(RejectReason::NoImprovement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::MAX_OPEN_STATION_FRACTION;
    use crate::core::solution::Solution;
    use crate::models::test_fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn refuses_when_eighty_percent_open() {
        let instance = test_fixtures::line_instance();
        let mut types = vec![Some(0); 10];
        let mut cables = vec![Some(0); 10];
        types[8] = None;
        types[9] = None;
        cables[8] = None;
        cables[9] = None;
        let solution = Solution::new(&instance, types, cables, vec![0; 24]);
        let mut state = SearchState::new(solution);
        let before = state.clone();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = open_station(&mut state, MAX_OPEN_STATION_FRACTION, &mut rng).unwrap();
            assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn expensive_station_is_not_opened_for_small_savings() {
        let instance = test_fixtures::two_station_instance();
        // Only A is open and carries all three turbines: 1 unit overflow at 50,
        // plus turbine 3 wired 9 away. Opening B costs 200 and only turbine 1
        // is worth moving, saving 42.
        let solution = Solution::new(&instance, vec![Some(0), None], vec![Some(0), None], vec![0, 0, 0]);
        let mut state = SearchState::new(solution);
        let before = state.clone();

        let mut rng = StdRng::seed_from_u64(11);
        let outcome = open_station(&mut state, MAX_OPEN_STATION_FRACTION, &mut rng).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::NoImprovement));
        assert_eq!(state, before);
    }

    #[test]
    fn cheap_station_near_stranded_turbines_is_opened() {
        let instance = test_fixtures::line_instance();
        // Everything crammed on site 0 with tiny equipment: huge curtailment.
        let mut types = vec![None; 10];
        let mut cables = vec![None; 10];
        types[0] = Some(0);
        cables[0] = Some(0);
        let solution = Solution::new(&instance, types, cables, vec![0; 24]);
        let state = SearchState::new(solution);
        let before = state.objective();

        let mut accepted = 0;
        for seed in 0..20 {
            let mut trial = state.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = open_station(&mut trial, MAX_OPEN_STATION_FRACTION, &mut rng).unwrap();
            assert!(trial.verify().is_ok());
            if outcome.is_accepted() {
                accepted += 1;
                assert_eq!(trial.solution().open_count(), 2);
                assert!(trial.objective() < before);
            } else {
                assert_eq!(trial, state);
            }
        }
        assert!(accepted > 0);
    }
}
