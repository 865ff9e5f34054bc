use clap::Parser;
use crate::config::constants::{
    DEFAULT_FAILURE_THRESHOLD,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_OUTPUT_DIR,
    DEFAULT_RESTARTS,
};
use crate::config::search_config::SearchConfig;

#[derive(Parser)]
#[command(author, version, about = "Local search for offshore wind collection networks", long_about = None)]
pub struct Args {
    #[arg(long, help = "Path to the instance JSON file")]
    instance: String,

    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: usize,

    #[arg(long, default_value_t = DEFAULT_FAILURE_THRESHOLD, help = "Consecutive failures before escalating to the next neighborhood")]
    failure_threshold: usize,

    #[arg(short, long, default_value_t = DEFAULT_RESTARTS)]
    restarts: usize,

    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    #[arg(long, help = "Random seed for a reproducible run")]
    seed: Option<u64>,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    #[arg(long, default_value_t = false, help = "Verify solution and ledger after every move")]
    check_invariants: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false, help = "Also write the final ledger as CSV")]
    csv_export: bool,
}

impl Args {
    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn failure_threshold(&self) -> usize {
        self.failure_threshold
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn check_invariants(&self) -> bool {
        self.check_invariants
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn csv_export(&self) -> bool {
        self.csv_export
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_iterations: self.iterations,
            failure_threshold: self.failure_threshold,
            seed: self.seed,
            restarts: self.restarts,
            parallel: self.parallel,
            check_invariants: self.check_invariants,
            ..SearchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_search_config() {
        let args = Args::parse_from([
            "windgrid", "--instance", "toy.json", "-n", "250", "--seed", "11", "--restarts", "4", "--parallel",
        ]);
        let config = args.search_config();
        assert_eq!(args.instance(), "toy.json");
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.restarts, 4);
        assert!(config.parallel);
        assert_eq!(config.failure_threshold, DEFAULT_FAILURE_THRESHOLD);
        assert!(!config.check_invariants);
    }
}
