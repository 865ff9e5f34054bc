use crate::config::constants::EXPORT_INDEX_BASE;
use crate::core::multi_start::SearchOutcome;
use crate::core::state::SearchState;

pub fn print_search_summary(outcome: &SearchOutcome) {
    let report = &outcome.report;
    let breakdown = outcome.state.breakdown();

    println!("\nSearch Summary (restart {}, seed {})", outcome.restart, outcome.seed);
    println!("----------------------------------------");
    println!("Iterations: {}", report.iterations);
    println!("Stopped on: {}", if report.exhausted_neighborhoods { "all neighborhoods failed" } else { "iteration budget" });
    println!("Objective:");
    println!("  Initial: {:.2}", report.initial_objective);
    println!("  Final: {:.2}", report.final_objective);
    println!("  Improvement: {:.2}", report.initial_objective - report.final_objective);
    println!("Cost Breakdown:");
    println!("  Stations and land cables: {:.2}", breakdown.station_cost);
    println!("  Inter-station cables: {:.2}", breakdown.link_cost);
    println!("  Turbine wiring: {:.2}", breakdown.wiring_cost);
    println!("  Curtailment: {:.2}", breakdown.curtailment_cost);
    println!("Accepted Moves ({} total):", report.accepted_moves());
    for stats in &report.neighborhoods {
        println!(
            "  {}: {}/{} accepted, gain {:.2}",
            stats.neighborhood, stats.accepted, stats.attempted, stats.total_gain
        );
    }
}

pub fn print_station_details(state: &SearchState) {
    let solution = state.solution();
    let ledger = state.ledger();

    println!("\nStation Details:");
    println!("----------------------------------------");
    for station in solution.open_stations() {
        println!(
            "{}: type {}, land cable {}, turbines {}, curtailed {:.2}",
            station + EXPORT_INDEX_BASE,
            solution.station_type(station).map_or(0, |t| t + EXPORT_INDEX_BASE),
            solution.land_cable(station).map_or(0, |c| c + EXPORT_INDEX_BASE),
            ledger.turbine_count(station),
            ledger.station_loss(station),
        );
    }
    for (a, b, cable) in solution.links() {
        println!(
            "Link {} - {}: cable {}",
            a + EXPORT_INDEX_BASE,
            b + EXPORT_INDEX_BASE,
            cable + EXPORT_INDEX_BASE
        );
    }
    println!("----------------------------------------");
}
