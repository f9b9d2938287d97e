//! lunar-charge-sim entry point: CLI wiring and scenario-driven engine construction.

use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};

use lunar_charge_sim::cli::Args;
use lunar_charge_sim::io::export::export_csv;
use lunar_charge_sim::logging;
use lunar_charge_sim::reporting::{ConsoleReporter, MonitoringLog, Reporter};
use lunar_charge_sim::sim::kpi::RunSummary;

fn main() -> Result<()> {
    let args = Args::parse();

    // The live view owns the terminal, so it runs without a log subscriber.
    #[cfg(feature = "tui")]
    if args.tui {
        let scenario = args.load_scenario().context("failed to load scenario")?;
        let label = args
            .scenario
            .as_ref()
            .map(|p| p.display().to_string())
            .or_else(|| args.preset.clone())
            .unwrap_or_else(|| lunar_charge_sim::cli::DEFAULT_PRESET.to_string());
        return lunar_charge_sim::tui::run(scenario, &label).context("live view failed");
    }

    logging::init_logging(args.verbose);

    let scenario = args.load_scenario().context("failed to load scenario")?;

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("scenario has {} configuration error(s)", errors.len());
    }

    let engine = scenario.build_engine()?;
    let capacity_wh = engine.battery().capacity_wh();
    let total_hours = engine.config().total_hours();
    info!(
        total_hours,
        day_length_hours = engine.config().day_length_hours(),
        rated_power_w = engine.panel().rated_power_w(),
        capacity_wh,
        "starting simulation"
    );
    if args.throttle_ms > 0 && args.quiet {
        warn!("--throttle-ms has no effect together with --quiet");
    }

    let mut console = ConsoleReporter::new(io::stdout().lock()).with_throttle(args.throttle());
    let mut log = MonitoringLog::new();
    for record in engine.run() {
        if !args.quiet {
            console.report(&record)?;
        }
        log.report(&record)?;
    }

    let summary = RunSummary::from_records(log.records(), capacity_wh);
    console.print_summary(&summary)?;
    info!(
        hours = summary.hours,
        final_charge_wh = summary.final_charge_wh,
        "simulation finished"
    );

    if let Some(ref path) = args.telemetry_out {
        export_csv(log.records(), path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        info!(path = %path.display(), "telemetry written");
    }

    Ok(())
}
