use serde::{Deserialize, Serialize};
use crate::config::constants::{SHORE_X, SHORE_Y};
use crate::data::poi::{Coordinate, POI};
use crate::models::cable::{InterStationCable, LandCable};
use crate::models::scenario::Scenario;
use crate::models::substation::{StationSite, SubstationType};
use crate::models::turbine::Turbine;
use crate::utils::errors::WindGridError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralParameters {
    pub fixed_cost_cable: f64,
    pub variable_cost_cable: f64,     // Turbine-to-station wiring cost per unit length
    pub curtailing_penalty: f64,      // Reserved
    pub curtailing_cost: f64,         // Cost per unit of curtailed power
    pub maximum_power: f64,
    pub maximum_curtailing: f64,
}

/// Immutable problem data shared by every component of a search run.
///
/// Turbine-to-site and site-to-shore distances are computed once at
/// construction so the neighborhood operators never call `sqrt` in their
/// inner loops.
#[derive(Debug, Clone)]
pub struct Instance {
    stations: Vec<StationSite>,
    turbines: Vec<Turbine>,
    land_cables: Vec<LandCable>,
    inter_station_cables: Vec<InterStationCable>,
    scenarios: Vec<Scenario>,
    substation_types: Vec<SubstationType>,
    parameters: GeneralParameters,
    shore: Coordinate,
    turbine_distances: Vec<f64>, // [turbine * stations + station]
    shore_distances: Vec<f64>,
}

impl Instance {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stations: Vec<StationSite>,
        turbines: Vec<Turbine>,
        land_cables: Vec<LandCable>,
        inter_station_cables: Vec<InterStationCable>,
        scenarios: Vec<Scenario>,
        substation_types: Vec<SubstationType>,
        parameters: GeneralParameters,
    ) -> Result<Self, WindGridError> {
        if stations.is_empty() {
            return Err(WindGridError::InfeasibleInstance("no candidate station sites".to_string()));
        }
        if turbines.is_empty() {
            return Err(WindGridError::InfeasibleInstance("no wind turbines".to_string()));
        }
        if substation_types.is_empty() {
            return Err(WindGridError::InfeasibleInstance("empty substation type catalog".to_string()));
        }
        if land_cables.is_empty() {
            return Err(WindGridError::InfeasibleInstance("empty land cable catalog".to_string()));
        }
        if scenarios.is_empty() {
            return Err(WindGridError::InfeasibleInstance("no wind scenarios".to_string()));
        }

        let shore = Coordinate::new(SHORE_X, SHORE_Y);
        let turbine_distances = turbines
            .iter()
            .flat_map(|turbine| stations.iter().map(move |station| turbine.distance_to(station)))
            .collect();
        let shore_distances = stations
            .iter()
            .map(|station| station.get_coordinate().distance_to(&shore))
            .collect();

        Ok(Self {
            stations,
            turbines,
            land_cables,
            inter_station_cables,
            scenarios,
            substation_types,
            parameters,
            shore,
            turbine_distances,
            shore_distances,
        })
    }

    pub fn get_stations(&self) -> &[StationSite] {
        &self.stations
    }

    pub fn get_turbines(&self) -> &[Turbine] {
        &self.turbines
    }

    pub fn get_land_cables(&self) -> &[LandCable] {
        &self.land_cables
    }

    pub fn get_inter_station_cables(&self) -> &[InterStationCable] {
        &self.inter_station_cables
    }

    pub fn get_scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get_substation_types(&self) -> &[SubstationType] {
        &self.substation_types
    }

    pub fn get_parameters(&self) -> &GeneralParameters {
        &self.parameters
    }

    pub fn get_shore(&self) -> &Coordinate {
        &self.shore
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn turbine_count(&self) -> usize {
        self.turbines.len()
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn turbine_distance(&self, turbine: usize, station: usize) -> f64 {
        self.turbine_distances[turbine * self.stations.len() + station]
    }

    pub fn shore_distance(&self, station: usize) -> f64 {
        self.shore_distances[station]
    }

    pub fn station_distance(&self, a: usize, b: usize) -> f64 {
        self.stations[a].distance_to(&self.stations[b])
    }
}
