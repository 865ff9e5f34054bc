use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde::Deserialize;
use tracing::info;
use super::poi::Coordinate;
use crate::models::cable::{InterStationCable, LandCable};
use crate::models::instance::{GeneralParameters, Instance};
use crate::models::scenario::Scenario;
use crate::models::substation::{StationSite, SubstationType};
use crate::models::turbine::Turbine;
use crate::utils::errors::WindGridError;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug, Deserialize)]
struct PointRecord {
    id: u32,
    x: f64,
    y: f64,
}

impl PointRecord {
    fn coordinate(&self) -> Result<Coordinate, WindGridError> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WindGridError::InfeasibleInstance(format!(
                "point {} has non-finite coordinates ({}, {})", self.id, self.x, self.y
            )));
        }
        Ok(Coordinate::new(self.x, self.y))
    }
}

#[derive(Debug, Deserialize)]
struct InstanceRecord {
    land_substation_cable_types: Vec<LandCable>,
    #[serde(default)]
    substation_substation_cable_types: Vec<InterStationCable>,
    wind_turbines: Vec<PointRecord>,
    wind_scenarios: Vec<Scenario>,
    substation_locations: Vec<PointRecord>,
    substation_types: Vec<SubstationType>,
    general_parameters: GeneralParameters,
}

/// Builds an `Instance` from the JSON problem format. Records keep file order,
/// so internal indices are the 0-based positions in each array.
pub fn parse_instance(json: &str) -> Result<Instance, WindGridError> {
    let record: InstanceRecord = serde_json::from_str(json)?;

    let stations = record
        .substation_locations
        .iter()
        .map(|site| Ok(StationSite::new(site.id, site.coordinate()?)))
        .collect::<Result<Vec<_>, WindGridError>>()?;
    let turbines = record
        .wind_turbines
        .iter()
        .map(|turbine| Ok(Turbine::new(turbine.id, turbine.coordinate()?)))
        .collect::<Result<Vec<_>, WindGridError>>()?;

    Instance::new(
        stations,
        turbines,
        record.land_substation_cable_types,
        record.substation_substation_cable_types,
        record.wind_scenarios,
        record.substation_types,
        record.general_parameters,
    )
}

pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<Instance, WindGridError> {
    let _timing = logging::start_timing(
        "load_instance",
        OperationCategory::FileIO { subcategory: FileIOType::InstanceLoad },
    );

    let mut contents = String::new();
    File::open(path.as_ref())?.read_to_string(&mut contents)?;
    let instance = parse_instance(&contents)?;

    info!(
        "Loaded instance {}: {} station sites, {} turbines, {} scenarios, {} substation types, {} land cables, {} inter-station cables",
        path.as_ref().display(),
        instance.station_count(),
        instance.turbine_count(),
        instance.scenario_count(),
        instance.get_substation_types().len(),
        instance.get_land_cables().len(),
        instance.get_inter_station_cables().len(),
    );
    Ok(instance)
}
