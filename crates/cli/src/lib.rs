//! Harness library: argument parsing, run series execution, and the results
//! table. The binary in `main.rs` is a thin shell over this.

use std::time::Duration;

use stocksim_runner::{EngineVariant, RunCoordinator, RunPlan, RunReport};

pub mod args;
pub mod table;

pub use args::CliArgs;

/// The per-operation processing delay the demonstration runs with. Wide
/// enough to make the racy variant's lost updates show up in a handful of
/// runs.
pub const DEMO_PROCESSING_DELAY: Duration = Duration::from_millis(1);

/// Pause each worker takes between its own operations.
pub const DEMO_PAUSE_BETWEEN_OPS: Duration = Duration::from_millis(10);

/// Execute `runs` independent runs of `plan` against fresh engines.
pub fn run_series(
    variant: EngineVariant,
    runs: u32,
    plan: RunPlan,
    processing_delay: Option<Duration>,
) -> Vec<RunReport> {
    let coordinator = RunCoordinator::new(plan);
    (1..=runs)
        .map(|run_index| {
            let engine = variant.build(coordinator.plan(), processing_delay);
            coordinator.execute(engine.as_ref(), run_index)
        })
        .collect()
}
