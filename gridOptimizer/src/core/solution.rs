use std::collections::BTreeMap;
use crate::models::cable::Cable;
use crate::models::instance::Instance;
use crate::utils::errors::WindGridError;

/// Decision variables of one candidate network.
///
/// Each per-site `Option` stands for a one-hot row: `None` is the all-zero
/// row of a closed site, `Some(index)` the single selected catalog entry.
/// Inter-station links are keyed by `(lower site, higher site)`.
#[derive(Debug, Clone)]
pub struct Solution<'a> {
    instance: &'a Instance,
    station_types: Vec<Option<usize>>,
    land_cables: Vec<Option<usize>>,
    links: BTreeMap<(usize, usize), usize>,
    assignment: Vec<usize>,
}

impl PartialEq for Solution<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.instance, other.instance)
            && self.station_types == other.station_types
            && self.land_cables == other.land_cables
            && self.links == other.links
            && self.assignment == other.assignment
    }
}

fn link_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

impl<'a> Solution<'a> {
    pub fn new(
        instance: &'a Instance,
        station_types: Vec<Option<usize>>,
        land_cables: Vec<Option<usize>>,
        assignment: Vec<usize>,
    ) -> Self {
        Self {
            instance,
            station_types,
            land_cables,
            links: BTreeMap::new(),
            assignment,
        }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn station_type(&self, station: usize) -> Option<usize> {
        self.station_types[station]
    }

    pub fn land_cable(&self, station: usize) -> Option<usize> {
        self.land_cables[station]
    }

    pub fn assigned_station(&self, turbine: usize) -> usize {
        self.assignment[turbine]
    }

    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    pub fn is_open(&self, station: usize) -> bool {
        self.station_types[station].is_some()
    }

    pub fn open_stations(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.station_types.len()).filter(move |&s| self.is_open(s))
    }

    pub fn open_count(&self) -> usize {
        self.station_types.iter().filter(|t| t.is_some()).count()
    }

    pub fn links(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.links.iter().map(|(&(a, b), &cable)| (a, b, cable))
    }

    pub fn turbines_of(&self, station: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == station)
            .map(|(t, _)| t)
            .collect()
    }

    /// Nearest open site to `turbine`; ties go to the lower site index.
    pub fn nearest_open_station(&self, turbine: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for station in self.open_stations() {
            let dist = self.instance.turbine_distance(turbine, station);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((station, dist)),
            }
        }
        best.map(|(station, _)| station)
    }

    pub(crate) fn open_station(&mut self, station: usize, station_type: usize, land_cable: usize) {
        self.station_types[station] = Some(station_type);
        self.land_cables[station] = Some(land_cable);
    }

    /// Clears the site's rows and drops any link touching it. Turbines still
    /// pointing at the site must be reassigned by the caller.
    pub(crate) fn close_station(&mut self, station: usize) {
        self.station_types[station] = None;
        self.land_cables[station] = None;
        self.links.retain(|&(a, b), _| a != station && b != station);
    }

    pub(crate) fn set_station_type(&mut self, station: usize, station_type: usize) {
        self.station_types[station] = Some(station_type);
    }

    pub(crate) fn set_land_cable(&mut self, station: usize, land_cable: usize) {
        self.land_cables[station] = Some(land_cable);
    }

    pub(crate) fn assign_turbine(&mut self, turbine: usize, station: usize) {
        self.assignment[turbine] = station;
    }

    pub fn add_link(&mut self, a: usize, b: usize, cable: usize) -> Result<(), WindGridError> {
        if a == b || !self.is_open(a) || !self.is_open(b) {
            return Err(WindGridError::InvariantViolation(format!(
                "link {}-{} must join two distinct open stations", a, b
            )));
        }
        if cable >= self.instance.get_inter_station_cables().len() {
            return Err(WindGridError::InvariantViolation(format!(
                "inter-station cable type {} out of range", cable
            )));
        }
        self.links.insert(link_key(a, b), cable);
        Ok(())
    }

    /// Substation plus land cable to shore; zero for a closed site.
    pub fn station_install_cost(&self, station: usize) -> f64 {
        let (Some(station_type), Some(land_cable)) = (self.station_types[station], self.land_cables[station]) else {
            return 0.0;
        };
        let substation = self.instance.get_substation_types()[station_type].cost;
        let cable = self.instance.get_land_cables()[land_cable]
            .installation_cost(self.instance.shore_distance(station));
        substation + cable
    }

    /// Everything that disappears when the site is closed, links included.
    pub fn station_capital_cost(&self, station: usize) -> f64 {
        let links: f64 = self
            .links()
            .filter(|&(a, b, _)| a == station || b == station)
            .map(|(a, b, c)| self.link_cost(a, b, c))
            .sum();
        self.station_install_cost(station) + links
    }

    pub fn link_cost(&self, a: usize, b: usize, cable: usize) -> f64 {
        self.instance.get_inter_station_cables()[cable].installation_cost(self.instance.station_distance(a, b))
    }

    pub fn wiring_cost(&self, turbine: usize) -> f64 {
        self.instance.get_parameters().variable_cost_cable
            * self.instance.turbine_distance(turbine, self.assignment[turbine])
    }

    pub fn check_invariants(&self) -> Result<(), WindGridError> {
        let instance = self.instance;
        let stations = instance.station_count();
        if self.station_types.len() != stations || self.land_cables.len() != stations {
            return Err(WindGridError::InvariantViolation("station rows do not match the catalog".to_string()));
        }
        if self.assignment.len() != instance.turbine_count() {
            return Err(WindGridError::InvariantViolation("turbine rows do not match the catalog".to_string()));
        }

        for station in 0..stations {
            match (self.station_types[station], self.land_cables[station]) {
                (Some(t), Some(c)) => {
                    if t >= instance.get_substation_types().len() || c >= instance.get_land_cables().len() {
                        return Err(WindGridError::InvariantViolation(format!(
                            "station {} selects an unknown catalog entry", station
                        )));
                    }
                }
                (None, None) => {}
                _ => {
                    return Err(WindGridError::InvariantViolation(format!(
                        "station {} has a substation type without a land cable or vice versa", station
                    )));
                }
            }
        }

        for (turbine, &station) in self.assignment.iter().enumerate() {
            if station >= stations || !self.is_open(station) {
                return Err(WindGridError::InvariantViolation(format!(
                    "turbine {} assigned to closed station {}", turbine, station
                )));
            }
        }

        for (a, b, _) in self.links() {
            if a == b || !self.is_open(a) || !self.is_open(b) {
                return Err(WindGridError::InvariantViolation(format!(
                    "link {}-{} touches a closed station", a, b
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures;

    #[test]
    fn invariants_flag_turbine_on_closed_station() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), None], vec![Some(0), None], vec![0, 0, 1]);
        assert!(matches!(solution.check_invariants(), Err(WindGridError::InvariantViolation(_))));
    }

    #[test]
    fn invariants_flag_half_open_station() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), None], vec![0, 0, 0]);
        assert!(solution.check_invariants().is_err());
    }

    #[test]
    fn nearest_open_station_prefers_closest_site() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        assert_eq!(solution.nearest_open_station(0), Some(0));
        assert_eq!(solution.nearest_open_station(2), Some(1));
        assert!(solution.check_invariants().is_ok());
    }

    #[test]
    fn closing_a_station_drops_its_links() {
        let instance = test_fixtures::two_station_instance();
        let mut solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        // The fixture has no inter-station catalog, so any link is refused.
        assert!(solution.add_link(0, 1, 0).is_err());
        solution.close_station(1);
        assert!(!solution.is_open(1));
        assert_eq!(solution.links().count(), 0);
        assert_eq!(solution.open_count(), 1);
    }

    #[test]
    fn capital_cost_includes_cable_to_shore() {
        let instance = test_fixtures::two_station_instance();
        let solution = Solution::new(&instance, vec![Some(0), Some(0)], vec![Some(0), Some(0)], vec![0, 0, 1]);
        // Site A sits on the shore; site B is 10 away at 10 per unit.
        assert_eq!(solution.station_capital_cost(0), 100.0);
        assert_eq!(solution.station_capital_cost(1), 200.0);
        assert_eq!(solution.wiring_cost(2), 1.0);
    }
}
