use serde::{Deserialize, Serialize};

/// Shared view over the two cable catalogs.
pub trait Cable {
    fn get_id(&self) -> u32;
    fn get_rating(&self) -> f64;
    fn get_fixed_cost(&self) -> f64;
    fn get_variable_cost(&self) -> f64;
    fn get_probability_of_failure(&self) -> Option<f64>;

    /// Cost of laying one cable of this type over `length`.
    fn installation_cost(&self, length: f64) -> f64 {
        self.get_fixed_cost() + self.get_variable_cost() * length
    }
}

/// Cable between an offshore substation and the shore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCable {
    pub id: u32,
    pub rating: f64,
    pub fixed_cost: f64,
    pub variable_cost: f64,
    #[serde(default)]
    pub probability_of_failure: Option<f64>, // Reserved, not used by the objective
}

/// Cable linking two offshore substations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterStationCable {
    pub id: u32,
    pub rating: f64,
    pub fixed_cost: f64,
    pub variable_cost: f64,
    #[serde(default)]
    pub probability_of_failure: Option<f64>,
}

impl Cable for LandCable {
    fn get_id(&self) -> u32 {
        self.id
    }

    fn get_rating(&self) -> f64 {
        self.rating
    }

    fn get_fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    fn get_variable_cost(&self) -> f64 {
        self.variable_cost
    }

    fn get_probability_of_failure(&self) -> Option<f64> {
        self.probability_of_failure
    }
}

impl Cable for InterStationCable {
    fn get_id(&self) -> u32 {
        self.id
    }

    fn get_rating(&self) -> f64 {
        self.rating
    }

    fn get_fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    fn get_variable_cost(&self) -> f64 {
        self.variable_cost
    }

    fn get_probability_of_failure(&self) -> Option<f64> {
        self.probability_of_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installation_cost_scales_with_length() {
        let cable = LandCable {
            id: 1,
            rating: 5.0,
            fixed_cost: 10.0,
            variable_cost: 2.5,
            probability_of_failure: None,
        };
        assert_eq!(cable.installation_cost(0.0), 10.0);
        assert_eq!(cable.installation_cost(4.0), 20.0);
    }
}
