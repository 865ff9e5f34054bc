use serde::{Deserialize, Serialize};
use crate::data::poi::{Coordinate, POI};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turbine {
    id: u32,
    coordinate: Coordinate,
}

impl Turbine {
    pub fn new(id: u32, coordinate: Coordinate) -> Self {
        Self { id, coordinate }
    }
}

impl POI for Turbine {
    fn get_coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    fn get_id(&self) -> u32 {
        self.id
    }
}
