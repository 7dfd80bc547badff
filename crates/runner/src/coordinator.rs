//! The run coordinator: spawn, join, snapshot, verify.

use std::thread;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use stocksim_core::{ProductId, RunId, WorkerId};
use stocksim_inventory::{OpStats, StockEngine};

use crate::plan::RunPlan;
use crate::worker::Worker;

/// One verified cell: what the run observed versus the plan's closed-form
/// expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellCheck {
    pub product: ProductId,
    pub observed: i64,
    pub expected: i64,
}

impl CellCheck {
    pub fn matches(&self) -> bool {
        self.observed == self.expected
    }
}

/// The outcome of one run, read only after every worker has joined.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub run_index: u32,
    pub variant: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub final_stock: Vec<i64>,
    pub stats: OpStats,
    /// One entry per cell with a derivable expectation (see
    /// [`RunPlan::expected_stock`]); cells whose sells can fail under some
    /// interleaving carry no expectation and are not checked.
    pub checks: Vec<CellCheck>,
    pub matches_expected: bool,
}

impl RunReport {
    pub fn stock_of(&self, product: ProductId) -> Option<i64> {
        self.final_stock.get(product.index()).copied()
    }

    pub fn check_for(&self, product: ProductId) -> Option<&CellCheck> {
        self.checks.iter().find(|c| c.product == product)
    }
}

/// Builds the worker set from a plan and drives a run to completion.
///
/// Workers borrow the engine through a thread scope, so the coordinator can
/// only reach the snapshot-and-verify step after every worker has joined —
/// the join barrier holds by construction, not by discipline.
pub struct RunCoordinator {
    plan: RunPlan,
}

impl RunCoordinator {
    pub fn new(plan: RunPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    /// Execute one full run against `engine` and report on the settled state.
    pub fn execute(&self, engine: &dyn StockEngine, run_index: u32) -> RunReport {
        let run_id = RunId::new();
        let started_at = Utc::now();

        info!(
            run = %run_id,
            run_index,
            variant = engine.variant(),
            workers = self.plan.worker_count(),
            operations = self.plan.total_operations(),
            "run started"
        );

        let clock = Instant::now();

        thread::scope(|scope| {
            for (ordinal, ops) in self.plan.workers.iter().enumerate() {
                let worker = Worker::new(WorkerId(ordinal as u32 + 1), ops.clone());
                let pause = self.plan.pause_between_ops;
                thread::Builder::new()
                    .name(worker.id().to_string())
                    .spawn_scoped(scope, move || worker.run(engine, pause))
                    .expect("failed to spawn worker thread");
            }
            // Scope exit joins every worker.
        });

        let elapsed_ms = clock.elapsed().as_millis() as u64;
        let snapshot = engine.snapshot();

        let checks: Vec<CellCheck> = (0..self.plan.product_count)
            .filter_map(|i| {
                let product = ProductId(i);
                let expected = self.plan.expected_stock(product)?;
                Some(CellCheck {
                    product,
                    observed: snapshot.stock_of(product).unwrap_or_default(),
                    expected,
                })
            })
            .collect();
        let matches_expected = checks.iter().all(CellCheck::matches);

        info!(
            run = %run_id,
            run_index,
            variant = engine.variant(),
            elapsed_ms,
            completed = snapshot.stats.completed,
            failed = snapshot.stats.failed,
            matches_expected,
            "run finished"
        );

        RunReport {
            run_id,
            run_index,
            variant: engine.variant().to_string(),
            started_at,
            elapsed_ms,
            final_stock: snapshot.stock,
            stats: snapshot.stats,
            checks,
            matches_expected,
        }
    }
}
