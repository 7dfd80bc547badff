//! The synchronized engine: one mutex per cell.
//!
//! The whole read-check-compute-write sequence for a cell runs while holding
//! that cell's guard, so operations on one cell are linearized and no update
//! is lost. Cells have independent guards (an arena of locks indexed by
//! `ProductId`), so operations on different cells never contend — the point
//! of per-cell granularity over a single inventory-wide lock. The aggregate
//! counters live under their own mutex, taken only after the cell guard is
//! released; at most one cell guard is ever held per operation, so no lock
//! ordering cycle exists.

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use stocksim_core::{ProductId, StockError, StockResult};

use crate::engine::StockEngine;
use crate::stats::OpStats;

/// Inventory engine with per-cell mutual exclusion.
pub struct LockedInventory {
    cells: Vec<Mutex<i64>>,
    stats: Mutex<OpStats>,
    processing_delay: Option<Duration>,
}

impl LockedInventory {
    /// Create an inventory of `products` cells, each holding `initial_stock`.
    pub fn new(products: usize, initial_stock: i64) -> Self {
        Self {
            cells: (0..products).map(|_| Mutex::new(initial_stock)).collect(),
            stats: Mutex::new(OpStats::default()),
            processing_delay: None,
        }
    }

    /// Sleep for `delay` inside the critical section, mirroring the racy
    /// engine's suspension points so timing comparisons between the two
    /// variants are like for like.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = Some(delay);
        self
    }

    fn cell(&self, product: ProductId) -> StockResult<&Mutex<i64>> {
        self.cells
            .get(product.index())
            .ok_or(StockError::unknown_product(product))
    }

    fn processing_window(&self) {
        if let Some(delay) = self.processing_delay {
            thread::sleep(delay);
        }
    }

    fn record(&self, succeeded: bool) {
        let mut stats = self.stats.lock().unwrap();
        if succeeded {
            stats.completed += 1;
        } else {
            stats.failed += 1;
        }
    }
}

impl StockEngine for LockedInventory {
    fn variant(&self) -> &'static str {
        "locked"
    }

    fn product_count(&self) -> usize {
        self.cells.len()
    }

    fn sell(&self, product: ProductId, amount: u32) -> StockResult<i64> {
        let outcome = {
            // Guard held for the full read-check-compute-write sequence and
            // released on every exit path, including the failed sell.
            let mut stock = self.cell(product)?.lock().unwrap();

            let observed = *stock;
            self.processing_window();

            if observed < i64::from(amount) {
                Err(StockError::insufficient(product, observed, amount))
            } else {
                let updated = observed - i64::from(amount);
                self.processing_window();
                *stock = updated;
                Ok(updated)
            }
        };

        match outcome {
            Ok(updated) => {
                debug!(
                    engine = self.variant(),
                    product = %product,
                    sold = amount,
                    stock = updated,
                    "sell completed"
                );
                self.record(true);
            }
            Err(StockError::InsufficientStock {
                available,
                requested,
                ..
            }) => {
                warn!(
                    engine = self.variant(),
                    product = %product,
                    available,
                    requested,
                    "sell failed: insufficient stock"
                );
                self.record(false);
            }
            Err(_) => {}
        }
        outcome
    }

    fn restock(&self, product: ProductId, amount: u32) -> StockResult<i64> {
        let updated = {
            let mut stock = self.cell(product)?.lock().unwrap();

            let observed = *stock;
            self.processing_window();

            let updated = observed + i64::from(amount);
            self.processing_window();
            *stock = updated;
            updated
        };

        debug!(
            engine = self.variant(),
            product = %product,
            added = amount,
            stock = updated,
            "restock completed"
        );
        self.record(true);
        Ok(updated)
    }

    fn stock_of(&self, product: ProductId) -> StockResult<i64> {
        Ok(*self.cell(product)?.lock().unwrap())
    }

    fn stats(&self) -> OpStats {
        *self.stats.lock().unwrap()
    }
}
