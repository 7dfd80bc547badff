//! A worker: one thread of control executing a fixed operation list.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use stocksim_core::{OpKind, Operation, StockError, WorkerId};
use stocksim_inventory::StockEngine;

/// An independent unit of concurrent execution. Runs its operations in order
/// against the shared engine and terminates when the list is exhausted; no
/// retry, no rollback, no state outliving the run.
#[derive(Debug, Clone)]
pub struct Worker {
    id: WorkerId,
    ops: Vec<Operation>,
}

impl Worker {
    pub fn new(id: WorkerId, ops: Vec<Operation>) -> Self {
        Self { id, ops }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Execute the operation list to completion.
    ///
    /// Insufficient stock is an expected business outcome — the engine has
    /// already counted it — so the worker just keeps going.
    pub fn run(&self, engine: &dyn StockEngine, pause_between_ops: Option<Duration>) {
        info!(worker = %self.id, ops = self.ops.len(), "worker started");

        for (step, op) in self.ops.iter().enumerate() {
            debug!(
                worker = %self.id,
                step = step + 1,
                total = self.ops.len(),
                op = %op,
                "executing operation"
            );

            let result = match op.kind {
                OpKind::Sell => engine.sell(op.product, op.amount),
                OpKind::Restock => engine.restock(op.product, op.amount),
            };

            match result {
                Ok(_) | Err(StockError::InsufficientStock { .. }) => {}
                Err(err) => {
                    // A malformed plan (bad product id); nothing to do but
                    // surface it and move on.
                    warn!(worker = %self.id, op = %op, error = %err, "operation rejected");
                }
            }

            if let Some(pause) = pause_between_ops {
                thread::sleep(pause);
            }
        }

        info!(worker = %self.id, ops = self.ops.len(), "worker finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksim_core::ProductId;
    use stocksim_inventory::LockedInventory;

    #[test]
    fn worker_applies_its_operations_in_order() {
        let inv = LockedInventory::new(2, 100);
        let worker = Worker::new(
            WorkerId(1),
            vec![
                Operation::sell(0usize, 60),
                Operation::restock(0usize, 5),
                Operation::sell(1usize, 10),
            ],
        );

        worker.run(&inv, None);

        assert_eq!(inv.stock_of(ProductId(0)).unwrap(), 45);
        assert_eq!(inv.stock_of(ProductId(1)).unwrap(), 90);
        assert_eq!(inv.stats().completed, 3);
    }

    #[test]
    fn worker_survives_failed_sells_and_bad_targets() {
        let inv = LockedInventory::new(1, 10);
        let worker = Worker::new(
            WorkerId(2),
            vec![
                Operation::sell(0usize, 50),   // insufficient
                Operation::restock(5usize, 1), // unknown product
                Operation::restock(0usize, 7),
            ],
        );

        worker.run(&inv, None);

        assert_eq!(inv.stock_of(ProductId(0)).unwrap(), 17);
        let stats = inv.stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.failed, 1);
    }
}
