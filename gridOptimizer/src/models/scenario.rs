use serde::{Deserialize, Serialize};

/// One discrete wind regime: every turbine produces `power_generation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub power_generation: f64,
    pub probability: f64, // Stored only; losses are not probability-weighted
}
