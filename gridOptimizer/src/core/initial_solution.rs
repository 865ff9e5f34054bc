use rand::Rng;
use tracing::debug;
use crate::config::constants::{
    DEFAULT_LAND_CABLE_TYPE,
    DEFAULT_SUBSTATION_TYPE,
    FALLBACK_OPEN_STATION,
    INITIAL_OPEN_PROBABILITY,
};
use crate::core::solution::Solution;
use crate::models::instance::Instance;
use crate::utils::errors::WindGridError;
use crate::utils::logging::{self, OperationCategory};

/// Random seed solution: each site opens with probability one half (site 0
/// if none does), every open site gets the first substation type and land
/// cable, and each turbine goes to its nearest open site.
pub fn build_initial_solution<'a, R: Rng>(
    instance: &'a Instance,
    rng: &mut R,
) -> Result<Solution<'a>, WindGridError> {
    let _timing = logging::start_timing("build_initial_solution", OperationCategory::Initialization);

    let stations = instance.station_count();
    if stations == 0 {
        return Err(WindGridError::InfeasibleInstance("no candidate station sites".to_string()));
    }
    if instance.turbine_count() == 0 {
        return Err(WindGridError::InfeasibleInstance("no wind turbines to connect".to_string()));
    }
    if instance.get_substation_types().is_empty() || instance.get_land_cables().is_empty() {
        return Err(WindGridError::InfeasibleInstance("empty substation or land cable catalog".to_string()));
    }

    let mut opened: Vec<usize> = (0..stations)
        .filter(|_| rng.gen_bool(INITIAL_OPEN_PROBABILITY))
        .collect();
    if opened.is_empty() {
        opened.push(FALLBACK_OPEN_STATION);
    }
    debug!("Initial solution opens stations {:?}", opened);

    let mut station_types = vec![None; stations];
    let mut land_cables = vec![None; stations];
    for &station in &opened {
        station_types[station] = Some(DEFAULT_SUBSTATION_TYPE);
        land_cables[station] = Some(DEFAULT_LAND_CABLE_TYPE);
    }

    let mut solution = Solution::new(instance, station_types, land_cables, vec![FALLBACK_OPEN_STATION; instance.turbine_count()]);
    for turbine in 0..instance.turbine_count() {
        let nearest = solution.nearest_open_station(turbine).ok_or_else(|| {
            WindGridError::InfeasibleInstance(format!("turbine {} cannot reach any open station", turbine))
        })?;
        solution.assign_turbine(turbine, nearest);
    }

    solution.check_invariants()?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_solution_is_feasible_for_many_seeds() {
        let instance = test_fixtures::line_instance();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solution = build_initial_solution(&instance, &mut rng).unwrap();
            assert!(solution.check_invariants().is_ok());
            assert!(solution.open_count() >= 1);
            for station in solution.open_stations() {
                assert_eq!(solution.station_type(station), Some(DEFAULT_SUBSTATION_TYPE));
                assert_eq!(solution.land_cable(station), Some(DEFAULT_LAND_CABLE_TYPE));
            }
        }
    }

    #[test]
    fn turbines_go_to_the_nearest_open_station() {
        let instance = test_fixtures::line_instance();
        let mut rng = StdRng::seed_from_u64(7);
        let solution = build_initial_solution(&instance, &mut rng).unwrap();

        for turbine in 0..instance.turbine_count() {
            let assigned = solution.assigned_station(turbine);
            let assigned_dist = instance.turbine_distance(turbine, assigned);
            for station in solution.open_stations() {
                assert!(assigned_dist <= instance.turbine_distance(turbine, station));
            }
        }
    }
}
