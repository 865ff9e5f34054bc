use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use windgrid::analysis::reporting::{print_search_summary, print_station_details};
use windgrid::cli::cli::Args;
use windgrid::core::multi_start::run_multi_start;
use windgrid::data::instance_loader::load_instance;
use windgrid::utils::logging;
use windgrid::utils::run_exporter::RunExporter;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing());

    println!("Offshore Wind Collection Network Optimizer");
    println!("Restarts: {}, Parallel: {}, Invariant checks: {}, CSV export: {}",
             args.restarts(),
             if args.parallel() { "enabled" } else { "disabled" },
             if args.check_invariants() { "enabled" } else { "disabled" },
             if args.csv_export() { "enabled" } else { "disabled" });

    let instance = load_instance(args.instance())
        .with_context(|| format!("failed to load instance {}", args.instance()))?;

    let config = args.search_config();
    let outcome = run_multi_start(&instance, &config).context("local search failed")?;
    info!(
        "Best restart {} (seed {}): objective {:.3}",
        outcome.restart, outcome.seed, outcome.report.final_objective
    );

    let exporter = RunExporter::new(args.output_dir(), args.csv_export())
        .with_context(|| format!("failed to create output directory under {}", args.output_dir()))?;
    exporter.export_initial(&outcome.initial).context("failed to write initial solution")?;
    exporter.export_final(&outcome).context("failed to write final solution")?;

    print_search_summary(&outcome);
    print_station_details(&outcome.state);
    logging::print_timing_report();

    Ok(())
}
