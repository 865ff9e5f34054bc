use std::path::Path;
use serde::Serialize;
use crate::config::constants::EXPORT_INDEX_BASE;
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerRecord {
    pub station: usize,
    pub scenario: usize,
    pub turbines: usize,
    pub power_received: f64,
    pub power_in_stat: f64,
    pub losses_in_stat: f64,
    pub losses_in_stat_cable: f64,
}

/// One row per open station and scenario, 1-based like the JSON export.
pub fn ledger_records(state: &SearchState) -> Vec<LedgerRecord> {
    let ledger = state.ledger();
    state
        .solution()
        .open_stations()
        .flat_map(|station| {
            (0..state.instance().scenario_count()).map(move |scenario| LedgerRecord {
                station: station + EXPORT_INDEX_BASE,
                scenario: scenario + EXPORT_INDEX_BASE,
                turbines: ledger.turbine_count(station),
                power_received: ledger.power_received(station)[scenario],
                power_in_stat: ledger.power_in_stat(station)[scenario],
                losses_in_stat: ledger.losses_in_stat(station)[scenario],
                losses_in_stat_cable: ledger.losses_in_stat_cable(station)[scenario],
            })
        })
        .collect()
}

pub fn write_ledger_csv<P: AsRef<Path>>(state: &SearchState, path: P) -> Result<(), WindGridError> {
    let _timing = logging::start_timing(
        "write_ledger_csv",
        OperationCategory::FileIO { subcategory: FileIOType::LedgerExport },
    );

    let mut writer = csv::Writer::from_path(path)?;
    for record in ledger_records(state) {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solution::Solution;
    use crate::models::test_fixtures;

    #[test]
    fn one_row_per_open_station_and_scenario() {
        let instance = test_fixtures::line_instance();
        let mut types = vec![None; 10];
        let mut cables = vec![None; 10];
        types[3] = Some(1);
        cables[3] = Some(1);
        let state = SearchState::new(Solution::new(&instance, types, cables, vec![3; 24]));

        let records = ledger_records(&state);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.station == 4 && r.turbines == 24));
        assert_eq!(records[0].scenario, 1);
        assert_eq!(records[1].scenario, 2);
        assert_eq!(records[0].power_received, 24.0);
    }
}
