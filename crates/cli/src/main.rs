use anyhow::{Context, Result};
use tracing::info;

use stocksim_cli::args::{CliArgs, USAGE};
use stocksim_cli::{run_series, table, DEMO_PAUSE_BETWEEN_OPS, DEMO_PROCESSING_DELAY};
use stocksim_runner::RunPlan;

fn main() -> Result<()> {
    stocksim_observability::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let plan = RunPlan::standard().with_pause_between_ops(DEMO_PAUSE_BETWEEN_OPS);

    info!(
        variant = %args.variant,
        runs = args.runs,
        workers = plan.worker_count(),
        operations = plan.total_operations(),
        "starting simulation"
    );

    let reports = run_series(
        args.variant,
        args.runs,
        plan.clone(),
        Some(DEMO_PROCESSING_DELAY),
    );

    print!("{}", table::render(&plan, &reports));

    if args.json {
        let json =
            serde_json::to_string_pretty(&reports).context("failed to serialize run reports")?;
        println!("{json}");
    }

    // A mismatching racy run is the expected demonstration output, never a
    // process failure.
    Ok(())
}
