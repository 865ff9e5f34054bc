use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::config::constants::EXPORT_INDEX_BASE;
use crate::core::objective::ObjectiveBreakdown;
use crate::core::search::SearchReport;
use crate::core::solution::Solution;
use crate::utils::errors::WindGridError;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstationRecord {
    pub id: usize,
    pub substation_type: usize,
    pub land_cable_type: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub substation_id: usize,
    pub other_substation_id: usize,
    pub cable_type: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineRecord {
    pub id: usize,
    pub substation_id: usize,
}

/// Exported form of a solution. Every index is shifted by `EXPORT_INDEX_BASE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub substations: Vec<SubstationRecord>,
    pub substation_substation_cables: Vec<LinkRecord>,
    pub turbines: Vec<TurbineRecord>,
}

impl SolutionReport {
    pub fn from_solution(solution: &Solution) -> Self {
        let substations = solution
            .open_stations()
            .filter_map(|station| {
                Some(SubstationRecord {
                    id: station + EXPORT_INDEX_BASE,
                    substation_type: solution.station_type(station)? + EXPORT_INDEX_BASE,
                    land_cable_type: solution.land_cable(station)? + EXPORT_INDEX_BASE,
                })
            })
            .collect();

        let substation_substation_cables = solution
            .links()
            .map(|(a, b, cable)| LinkRecord {
                substation_id: a + EXPORT_INDEX_BASE,
                other_substation_id: b + EXPORT_INDEX_BASE,
                cable_type: cable + EXPORT_INDEX_BASE,
            })
            .collect();

        let turbines = solution
            .assignment()
            .iter()
            .enumerate()
            .map(|(turbine, &station)| TurbineRecord {
                id: turbine + EXPORT_INDEX_BASE,
                substation_id: station + EXPORT_INDEX_BASE,
            })
            .collect();

        Self {
            substations,
            substation_substation_cables,
            turbines,
        }
    }
}

/// Run-level metadata saved next to the final solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSummary {
    pub seed: u64,
    pub restart: usize,
    pub objective: ObjectiveBreakdown,
    pub report: SearchReport,
}

fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), WindGridError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

pub fn write_solution_json<P: AsRef<Path>>(solution: &Solution, path: P) -> Result<(), WindGridError> {
    let _timing = logging::start_timing(
        "write_solution_json",
        OperationCategory::FileIO { subcategory: FileIOType::SolutionExport },
    );
    write_json(&SolutionReport::from_solution(solution), path)
}

pub fn write_search_summary<P: AsRef<Path>>(summary: &SearchSummary, path: P) -> Result<(), WindGridError> {
    let _timing = logging::start_timing(
        "write_search_summary",
        OperationCategory::FileIO { subcategory: FileIOType::ReportSave },
    );
    write_json(summary, path)
}
