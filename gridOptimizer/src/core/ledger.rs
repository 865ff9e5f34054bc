use serde::Serialize;
use crate::core::solution::Solution;
use crate::models::cable::Cable;

/// Per-station, per-scenario power and loss accounting derived from a
/// [`Solution`].
///
/// Rows are always re-derived from `turbine_count`, never patched by adding
/// or subtracting generation, so an incrementally maintained ledger is
/// bit-for-bit equal to [`SolutionLedger::build`] on the same solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionLedger {
    open_stations: Vec<bool>,
    turbine_count: Vec<usize>,
    power_received: Vec<Vec<f64>>,
    power_in_stat: Vec<Vec<f64>>,
    losses_in_stat: Vec<Vec<f64>>,
    losses_in_stat_cable: Vec<Vec<f64>>,
}

impl SolutionLedger {
    pub fn build(solution: &Solution) -> Self {
        let instance = solution.instance();
        let stations = instance.station_count();
        let scenarios = instance.scenario_count();

        let mut turbine_count = vec![0; stations];
        for &station in solution.assignment() {
            turbine_count[station] += 1;
        }

        let mut ledger = Self {
            open_stations: vec![false; stations],
            turbine_count,
            power_received: vec![vec![0.0; scenarios]; stations],
            power_in_stat: vec![vec![0.0; scenarios]; stations],
            losses_in_stat: vec![vec![0.0; scenarios]; stations],
            losses_in_stat_cable: vec![vec![0.0; scenarios]; stations],
        };
        for station in 0..stations {
            ledger.refresh_station(solution, station);
        }
        ledger
    }

    /// Re-derives every scenario of one station from its turbine count and the
    /// equipment currently installed in `solution`.
    pub(crate) fn refresh_station(&mut self, solution: &Solution, station: usize) {
        let instance = solution.instance();
        let installed = solution.station_type(station).zip(solution.land_cable(station));
        self.open_stations[station] = installed.is_some();

        let Some((station_type, land_cable)) = installed else {
            self.power_received[station].fill(0.0);
            self.power_in_stat[station].fill(0.0);
            self.losses_in_stat[station].fill(0.0);
            self.losses_in_stat_cable[station].fill(0.0);
            return;
        };

        let capacity_stat = instance.get_substation_types()[station_type].rating;
        let capacity_cable = instance.get_land_cables()[land_cable].get_rating();
        let count = self.turbine_count[station] as f64;

        for (scen, scenario) in instance.get_scenarios().iter().enumerate() {
            let received = count * scenario.power_generation;
            let in_stat = received.min(capacity_stat);
            self.power_received[station][scen] = received;
            self.power_in_stat[station][scen] = in_stat;
            self.losses_in_stat[station][scen] = received - in_stat;
            self.losses_in_stat_cable[station][scen] = (in_stat - capacity_cable).max(0.0);
        }
    }

    /// Moves one turbine's worth of generation between two stations.
    pub(crate) fn move_turbine(&mut self, solution: &Solution, from: usize, to: usize) {
        self.turbine_count[from] -= 1;
        self.turbine_count[to] += 1;
        self.refresh_station(solution, from);
        self.refresh_station(solution, to);
    }

    pub fn is_open(&self, station: usize) -> bool {
        self.open_stations[station]
    }

    pub fn turbine_count(&self, station: usize) -> usize {
        self.turbine_count[station]
    }

    pub fn power_received(&self, station: usize) -> &[f64] {
        &self.power_received[station]
    }

    pub fn power_in_stat(&self, station: usize) -> &[f64] {
        &self.power_in_stat[station]
    }

    pub fn losses_in_stat(&self, station: usize) -> &[f64] {
        &self.losses_in_stat[station]
    }

    pub fn losses_in_stat_cable(&self, station: usize) -> &[f64] {
        &self.losses_in_stat_cable[station]
    }

    pub fn station_count(&self) -> usize {
        self.open_stations.len()
    }

    /// Substation plus cable overflow, summed over scenarios.
    pub fn station_loss(&self, station: usize) -> f64 {
        self.losses_in_stat[station].iter().sum::<f64>()
            + self.losses_in_stat_cable[station].iter().sum::<f64>()
    }

    pub fn total_loss(&self) -> f64 {
        (0..self.station_count()).map(|s| self.station_loss(s)).sum()
    }

    /// First station whose row differs from `other`, if any.
    pub fn first_divergence(&self, other: &SolutionLedger) -> Option<usize> {
        (0..self.station_count().max(other.station_count())).find(|&s| {
            self.open_stations.get(s) != other.open_stations.get(s)
                || self.turbine_count.get(s) != other.turbine_count.get(s)
                || self.power_received.get(s) != other.power_received.get(s)
                || self.power_in_stat.get(s) != other.power_in_stat.get(s)
                || self.losses_in_stat.get(s) != other.losses_in_stat.get(s)
                || self.losses_in_stat_cable.get(s) != other.losses_in_stat_cable.get(s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures;

    #[test]
    fn builds_rows_from_assignment() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        let ledger = SolutionLedger::build(&solution);

        assert!(ledger.is_open(0) && ledger.is_open(1));
        assert_eq!(ledger.power_received(0), &[4.0]);
        assert_eq!(ledger.power_in_stat(0), &[4.0]);
        assert_eq!(ledger.losses_in_stat(0), &[0.0]);
        assert_eq!(ledger.power_received(1), &[2.0]);
        assert_eq!(ledger.losses_in_stat(1), &[0.0]);
        assert_eq!(ledger.total_loss(), 0.0);
    }

    #[test]
    fn overflow_splits_between_substation_and_cable() {
        let instance = test_fixtures::line_instance();
        // Every turbine on site 0: small substation (8) and small cable (6).
        let mut types = vec![None; 10];
        let mut cables = vec![None; 10];
        types[0] = Some(0);
        cables[0] = Some(0);
        let solution = Solution::new(&instance, types, cables, vec![0; 24]);
        let ledger = SolutionLedger::build(&solution);

        assert_eq!(ledger.power_received(0), &[24.0, 60.0]);
        assert_eq!(ledger.power_in_stat(0), &[8.0, 8.0]);
        assert_eq!(ledger.losses_in_stat(0), &[16.0, 52.0]);
        assert_eq!(ledger.losses_in_stat_cable(0), &[2.0, 2.0]);
        assert_eq!(ledger.station_loss(0), 72.0);
        assert!(!ledger.is_open(3));
        assert_eq!(ledger.power_received(3), &[0.0, 0.0]);
    }

    #[test]
    fn incremental_move_matches_rebuild() {
        let instance = test_fixtures::two_station_instance();
        let mut solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        let mut ledger = SolutionLedger::build(&solution);

        ledger.move_turbine(&solution, 1, 0);
        solution.assign_turbine(2, 0);

        assert_eq!(ledger.power_received(0), &[6.0]);
        assert_eq!(ledger.losses_in_stat(0), &[1.0]);
        assert_eq!(ledger, SolutionLedger::build(&solution));
        assert_eq!(ledger.first_divergence(&SolutionLedger::build(&solution)), None);
    }
}
