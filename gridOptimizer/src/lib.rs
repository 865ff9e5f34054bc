// Main module declarations for the collection-network optimizer

// Core search modules
pub mod core {
    pub mod solution;
    pub mod ledger;
    pub mod state;
    pub mod objective;
    pub mod initial_solution;
    pub mod neighborhood;
    pub mod moves;
    pub mod search;
    pub mod multi_start;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod search_config;
}

// Instance catalog definitions
pub mod models {
    pub mod cable;
    pub mod substation;
    pub mod turbine;
    pub mod scenario;
    pub mod instance;
    #[cfg(test)]
    pub mod test_fixtures;
}

// Data loaders
pub mod data {
    pub mod instance_loader;
    pub mod poi;
}

// Reporting
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod errors;
    pub mod logging;
    pub mod json_export;
    pub mod csv_export;
    pub mod run_exporter;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used types
pub use crate::config::search_config::SearchConfig;
pub use crate::core::neighborhood::{MoveOutcome, Neighborhood, RejectReason};
pub use crate::core::search::{run_local_search, SearchReport};
pub use crate::core::multi_start::{run_multi_start, SearchOutcome};
pub use crate::core::state::SearchState;
pub use crate::models::instance::Instance;
pub use crate::utils::errors::WindGridError;
