// Small hand-checkable instances shared by the unit tests.

use crate::data::poi::Coordinate;
use crate::models::cable::LandCable;
use crate::models::instance::{GeneralParameters, Instance};
use crate::models::scenario::Scenario;
use crate::models::substation::{StationSite, SubstationType};
use crate::models::turbine::Turbine;

pub fn land_cable(rating: f64, variable_cost: f64) -> LandCable {
    LandCable {
        id: 1,
        rating,
        fixed_cost: 0.0,
        variable_cost,
        probability_of_failure: None,
    }
}

pub fn substation_type(rating: f64, cost: f64) -> SubstationType {
    SubstationType {
        id: 1,
        cost,
        rating,
        probability_of_failure: 0.0,
    }
}

pub fn scenario(power_generation: f64) -> Scenario {
    Scenario {
        id: 1,
        power_generation,
        probability: 1.0,
    }
}

pub fn parameters(variable_cost_cable: f64, curtailing_cost: f64) -> GeneralParameters {
    GeneralParameters {
        fixed_cost_cable: 0.0,
        variable_cost_cable,
        curtailing_penalty: 0.0,
        curtailing_cost,
        maximum_power: 100.0,
        maximum_curtailing: 0.1,
    }
}

/// Stations A (0,0) and B (10,0); turbines at (1,0), (2,0), (9,0).
pub fn two_station_instance() -> Instance {
    Instance::new(
        vec![
            StationSite::new(1, Coordinate::new(0.0, 0.0)),
            StationSite::new(2, Coordinate::new(10.0, 0.0)),
        ],
        vec![
            Turbine::new(1, Coordinate::new(1.0, 0.0)),
            Turbine::new(2, Coordinate::new(2.0, 0.0)),
            Turbine::new(3, Coordinate::new(9.0, 0.0)),
        ],
        vec![land_cable(5.0, 10.0)],
        Vec::new(),
        vec![scenario(2.0)],
        vec![substation_type(5.0, 100.0)],
        parameters(1.0, 50.0),
    )
    .expect("fixture instance is feasible")
}

/// Ten sites on a line with two substation types, two land cables and two scenarios.
pub fn line_instance() -> Instance {
    let stations = (0..10)
        .map(|i| StationSite::new(i as u32 + 1, Coordinate::new(i as f64 * 5.0, 3.0)))
        .collect();
    let turbines = (0..24)
        .map(|i| Turbine::new(i as u32 + 1, Coordinate::new(i as f64 * 2.0, (i % 3) as f64)))
        .collect();
    let land_cables = vec![
        LandCable {
            id: 1,
            rating: 6.0,
            fixed_cost: 20.0,
            variable_cost: 1.0,
            probability_of_failure: Some(0.01),
        },
        LandCable {
            id: 2,
            rating: 14.0,
            fixed_cost: 45.0,
            variable_cost: 1.5,
            probability_of_failure: Some(0.01),
        },
    ];
    let substation_types = vec![
        SubstationType {
            id: 1,
            cost: 60.0,
            rating: 8.0,
            probability_of_failure: 0.02,
        },
        SubstationType {
            id: 2,
            cost: 140.0,
            rating: 20.0,
            probability_of_failure: 0.02,
        },
    ];
    let scenarios = vec![
        Scenario {
            id: 1,
            power_generation: 1.0,
            probability: 0.6,
        },
        Scenario {
            id: 2,
            power_generation: 2.5,
            probability: 0.4,
        },
    ];

    Instance::new(
        stations,
        turbines,
        land_cables,
        Vec::new(),
        scenarios,
        substation_types,
        parameters(2.0, 30.0),
    )
    .expect("fixture instance is feasible")
}
