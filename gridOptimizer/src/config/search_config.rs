use serde::{Deserialize, Serialize};
use crate::config::constants::{
    DEFAULT_FAILURE_THRESHOLD,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_RESTARTS,
    MAX_OPEN_STATION_FRACTION,
};
use crate::core::neighborhood::Neighborhood;
use crate::utils::errors::WindGridError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_iterations: usize,                 // Operator attempts per restart
    pub failure_threshold: usize,              // Consecutive failures before moving to the next neighborhood
    pub neighborhood_order: Vec<Neighborhood>, // Escalation order, most local first
    pub seed: Option<u64>,
    pub max_open_fraction: f64,
    pub restarts: usize,
    pub parallel: bool,
    pub check_invariants: bool,                // Verify solution and ledger after every move
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            neighborhood_order: Neighborhood::ALL.to_vec(),
            seed: None,
            max_open_fraction: MAX_OPEN_STATION_FRACTION,
            restarts: DEFAULT_RESTARTS,
            parallel: false,
            check_invariants: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), WindGridError> {
        if self.neighborhood_order.is_empty() {
            return Err(WindGridError::InvalidConfig("neighborhood order is empty".to_string()));
        }
        if self.failure_threshold == 0 {
            return Err(WindGridError::InvalidConfig("failure threshold must be at least 1".to_string()));
        }
        if self.restarts == 0 {
            return Err(WindGridError::InvalidConfig("at least one restart is required".to_string()));
        }
        if !(0.0..=1.0).contains(&self.max_open_fraction) {
            return Err(WindGridError::InvalidConfig(format!(
                "open fraction cap {} outside [0, 1]", self.max_open_fraction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.failure_threshold, 10);
        assert_eq!(config.neighborhood_order[0], Neighborhood::ReassignTurbine);
    }

    #[test]
    fn rejects_empty_neighborhood_order() {
        let config = SearchConfig {
            neighborhood_order: Vec::new(),
            ..SearchConfig::default()
        };
        assert!(matches!(config.validate(), Err(WindGridError::InvalidConfig(_))));
    }
}
