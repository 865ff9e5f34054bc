use serde::{Deserialize, Serialize};
use crate::data::poi::{Coordinate, POI};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstationType {
    pub id: u32,
    pub cost: f64,
    pub rating: f64,
    #[serde(default)]
    pub probability_of_failure: f64, // Reserved, not used by the objective
}

/// Candidate location for an offshore substation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSite {
    id: u32,
    coordinate: Coordinate,
}

impl StationSite {
    pub fn new(id: u32, coordinate: Coordinate) -> Self {
        Self { id, coordinate }
    }
}

impl POI for StationSite {
    fn get_coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    fn get_id(&self) -> u32 {
        self.id
    }
}
