// Search Budget Constants
pub const DEFAULT_MAX_ITERATIONS: usize = 5000;
pub const DEFAULT_FAILURE_THRESHOLD: usize = 10;       // Consecutive failures before escalating
pub const DEFAULT_RESTARTS: usize = 1;

// Neighborhood Preconditions
pub const MAX_OPEN_STATION_FRACTION: f64 = 0.8;        // Open-station move refused at or above this share
pub const MIN_OPEN_STATIONS_FOR_CLOSE: usize = 2;

// Initial Solution Constants
pub const INITIAL_OPEN_PROBABILITY: f64 = 0.5;
pub const FALLBACK_OPEN_STATION: usize = 0;
pub const DEFAULT_SUBSTATION_TYPE: usize = 0;
pub const DEFAULT_LAND_CABLE_TYPE: usize = 0;

// Geometry Constants
pub const SHORE_X: f64 = 0.0;                          // Onshore connection point
pub const SHORE_Y: f64 = 0.0;

// Export Constants
pub const EXPORT_INDEX_BASE: usize = 1;                // Reports use 1-based indices
pub const DEFAULT_OUTPUT_DIR: &str = "solutions";
pub const INITIAL_SOLUTION_FILE: &str = "initial_solution.json";
pub const FINAL_SOLUTION_FILE: &str = "final_solution.json";
pub const SEARCH_REPORT_FILE: &str = "search_report.json";
pub const LEDGER_CSV_FILE: &str = "final_ledger.csv";

// Numeric Tolerances
pub const OBJECTIVE_TOLERANCE: f64 = 1e-6;             // Relative slack for objective comparisons
