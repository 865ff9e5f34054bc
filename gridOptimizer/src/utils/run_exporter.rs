use std::path::{Path, PathBuf};
use chrono::Local;
use tracing::info;
use crate::config::constants::{
    FINAL_SOLUTION_FILE,
    INITIAL_SOLUTION_FILE,
    LEDGER_CSV_FILE,
    SEARCH_REPORT_FILE,
};
use crate::core::multi_start::SearchOutcome;
use crate::core::solution::Solution;
use crate::utils::csv_export::write_ledger_csv;
use crate::utils::errors::WindGridError;
use crate::utils::json_export::{write_search_summary, write_solution_json, SearchSummary};

/// Writes the files of one optimizer run into a timestamped directory.
pub struct RunExporter {
    output_dir: PathBuf,
    timestamp: String,
    csv_export: bool,
}

impl RunExporter {
    /// Creates `<base_dir>/<YYYYmmdd_HHMMSS>/`.
    pub fn new(base_dir: impl AsRef<Path>, csv_export: bool) -> Result<Self, WindGridError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let output_dir = base_dir.as_ref().join(&timestamp);
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            output_dir,
            timestamp,
            csv_export,
        })
    }

    pub fn get_output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn get_timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn export_initial(&self, solution: &Solution) -> Result<PathBuf, WindGridError> {
        let path = self.output_dir.join(INITIAL_SOLUTION_FILE);
        write_solution_json(solution, &path)?;
        Ok(path)
    }

    /// Final solution, run summary and, when enabled, the ledger table.
    pub fn export_final(&self, outcome: &SearchOutcome) -> Result<(), WindGridError> {
        write_solution_json(outcome.state.solution(), self.output_dir.join(FINAL_SOLUTION_FILE))?;

        let summary = SearchSummary {
            seed: outcome.seed,
            restart: outcome.restart,
            objective: outcome.state.breakdown(),
            report: outcome.report.clone(),
        };
        write_search_summary(&summary, self.output_dir.join(SEARCH_REPORT_FILE))?;

        if self.csv_export {
            write_ledger_csv(&outcome.state, self.output_dir.join(LEDGER_CSV_FILE))?;
        }

        info!("Run output written to {}", self.output_dir.display());
        Ok(())
    }
}
