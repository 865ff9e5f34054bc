// Objective module - capital cost plus the curtailment penalty of a solution
use serde::{Deserialize, Serialize};
use crate::core::ledger::SolutionLedger;
use crate::core::solution::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveBreakdown {
    pub station_cost: f64,      // Substations plus land cables to shore
    pub link_cost: f64,         // Inter-station cables
    pub wiring_cost: f64,       // Turbine-to-station cabling
    pub curtailment_cost: f64,  // curtailing_cost x total loss over all scenarios
}

impl ObjectiveBreakdown {
    pub fn total(&self) -> f64 {
        self.station_cost + self.link_cost + self.wiring_cost + self.curtailment_cost
    }
}

pub fn evaluate(solution: &Solution, ledger: &SolutionLedger) -> ObjectiveBreakdown {
    let instance = solution.instance();

    let station_cost = solution
        .open_stations()
        .map(|s| solution.station_install_cost(s))
        .sum();
    let link_cost = solution
        .links()
        .map(|(a, b, cable)| solution.link_cost(a, b, cable))
        .sum();
    let wiring_cost = (0..instance.turbine_count())
        .map(|t| solution.wiring_cost(t))
        .sum();
    let curtailment_cost = instance.get_parameters().curtailing_cost * ledger.total_loss();

    ObjectiveBreakdown {
        station_cost,
        link_cost,
        wiring_cost,
        curtailment_cost,
    }
}

pub fn objective(solution: &Solution, ledger: &SolutionLedger) -> f64 {
    evaluate(solution, ledger).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures;

    #[test]
    fn objective_sums_every_cost_component() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        let ledger = SolutionLedger::build(&solution);
        let breakdown = evaluate(&solution, &ledger);

        assert_eq!(breakdown.station_cost, 300.0);
        assert_eq!(breakdown.link_cost, 0.0);
        assert_eq!(breakdown.wiring_cost, 4.0);
        assert_eq!(breakdown.curtailment_cost, 0.0);
        assert_eq!(objective(&solution, &ledger), 304.0);
    }
}
