//! Run orchestration: workers, the fixed workload, and the coordinator.
//!
//! A [`RunCoordinator`] takes a [`RunPlan`], spawns one worker thread per
//! operation list against a shared engine, joins them all, then snapshots the
//! inventory and verifies it against the plan's closed-form expectations.

pub mod coordinator;
pub mod plan;
pub mod variant;
pub mod worker;

pub use coordinator::{CellCheck, RunCoordinator, RunReport};
pub use plan::RunPlan;
pub use variant::EngineVariant;
pub use worker::Worker;
