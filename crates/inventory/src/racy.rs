//! The unsynchronized engine: lost updates by design.
//!
//! Each cell is an `AtomicI64` accessed with a *split* load and store
//! (`Relaxed` ordering), never a fetch-and-modify. The split keeps the
//! program free of undefined behavior while reproducing the classic lost
//! update: two operations read the same stale value, compute independently,
//! and the second store clobbers the first. Between the read and the write
//! sits a suspension point that widens the race window.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering::Relaxed};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use stocksim_core::{ProductId, StockError, StockResult};

use crate::engine::StockEngine;
use crate::stats::OpStats;

/// Inventory engine with no mutual exclusion.
pub struct RacyInventory {
    cells: Vec<AtomicI64>,
    completed: AtomicU64,
    failed: AtomicU64,
    processing_delay: Option<Duration>,
}

impl RacyInventory {
    /// Create an inventory of `products` cells, each holding `initial_stock`.
    pub fn new(products: usize, initial_stock: i64) -> Self {
        Self {
            cells: (0..products).map(|_| AtomicI64::new(initial_stock)).collect(),
            completed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            processing_delay: None,
        }
    }

    /// Sleep for `delay` at each suspension point instead of a bare yield.
    ///
    /// Only the read → suspension → write ordering matters for the
    /// demonstration; the delay merely makes the lost updates easier to
    /// observe in a short run.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = Some(delay);
        self
    }

    fn cell(&self, product: ProductId) -> StockResult<&AtomicI64> {
        self.cells
            .get(product.index())
            .ok_or(StockError::unknown_product(product))
    }

    /// The deliberate gap between reading a cell and writing it back.
    fn race_window(&self) {
        match self.processing_delay {
            Some(delay) => thread::sleep(delay),
            None => thread::yield_now(),
        }
    }

    // The counters share the cells' discipline: split read and write, so
    // concurrent bumps can be lost too.
    fn record(&self, succeeded: bool) {
        let counter = if succeeded { &self.completed } else { &self.failed };
        let count = counter.load(Relaxed);
        counter.store(count + 1, Relaxed);
    }
}

impl StockEngine for RacyInventory {
    fn variant(&self) -> &'static str {
        "racy"
    }

    fn product_count(&self) -> usize {
        self.cells.len()
    }

    fn sell(&self, product: ProductId, amount: u32) -> StockResult<i64> {
        let cell = self.cell(product)?;

        let observed = cell.load(Relaxed); // read
        self.race_window();

        if observed < i64::from(amount) {
            warn!(
                engine = self.variant(),
                product = %product,
                available = observed,
                requested = amount,
                "sell failed: insufficient stock"
            );
            self.record(false);
            return Err(StockError::insufficient(product, observed, amount));
        }

        let updated = observed - i64::from(amount); // compute from a possibly stale read
        self.race_window();
        cell.store(updated, Relaxed); // write, clobbering any concurrent update

        debug!(
            engine = self.variant(),
            product = %product,
            sold = amount,
            stock = updated,
            "sell completed"
        );
        self.record(true);
        Ok(updated)
    }

    fn restock(&self, product: ProductId, amount: u32) -> StockResult<i64> {
        let cell = self.cell(product)?;

        let observed = cell.load(Relaxed);
        self.race_window();

        let updated = observed + i64::from(amount);
        self.race_window();
        cell.store(updated, Relaxed);

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
        Ok(self.cell(product)?.load(Relaxed))
    }

    fn stats(&self) -> OpStats {
        OpStats {
            completed: self.completed.load(Relaxed),
            failed: self.failed.load(Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_threaded_semantics_match_the_locked_engine() {
        let inv = RacyInventory::new(2, 100);

        assert_eq!(inv.sell(ProductId(0), 30).unwrap(), 70);
        assert_eq!(inv.restock(ProductId(0), 10).unwrap(), 80);
        assert_eq!(inv.stock_of(ProductId(0)).unwrap(), 80);
        assert_eq!(inv.stock_of(ProductId(1)).unwrap(), 100);

        let stats = inv.stats();
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn failed_sell_does_not_mutate_the_cell() {
        let inv = RacyInventory::new(1, 5);

        let err = inv.sell(ProductId(0), 10).unwrap_err();
        assert_eq!(
            err,
            StockError::InsufficientStock {
                product: ProductId(0),
                available: 5,
                requested: 10,
            }
        );
        assert_eq!(inv.stock_of(ProductId(0)).unwrap(), 5);
        assert_eq!(inv.stats().failed, 1);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let inv = RacyInventory::new(3, 100);
        assert_eq!(
            inv.sell(ProductId(3), 1).unwrap_err(),
            StockError::UnknownProduct(ProductId(3))
        );
        assert_eq!(
            inv.stock_of(ProductId(99)).unwrap_err(),
            StockError::UnknownProduct(ProductId(99))
        );
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let inv = RacyInventory::new(1, 42);
        let first = inv.stock_of(ProductId(0)).unwrap();
        let second = inv.stock_of(ProductId(0)).unwrap();
        assert_eq!(first, second);
    }

    /// Contending restocks on one cell lose updates. A single attempt can in
    /// principle land on the correct total by chance, so the assertion holds
    /// across a batch of attempts.
    #[test]
    fn concurrent_restocks_lose_updates() {
        const THREADS: usize = 8;
        const OPS: usize = 100;
        const ATTEMPTS: usize = 10;

        let mut lost_anywhere = false;
        for _ in 0..ATTEMPTS {
            let inv = RacyInventory::new(1, 0)
                .with_processing_delay(Duration::from_micros(50));

            thread::scope(|scope| {
                for _ in 0..THREADS {
                    scope.spawn(|| {
                        for _ in 0..OPS {
                            inv.restock(ProductId(0), 1).unwrap();
                        }
                    });
                }
            });

            let expected = (THREADS * OPS) as i64;
            let observed = inv.stock_of(ProductId(0)).unwrap();
            assert!(observed <= expected, "restocks cannot overshoot: {observed}");
            if observed < expected {
                lost_anywhere = true;
            }
        }

        assert!(lost_anywhere, "no lost update across {ATTEMPTS} contended runs");
    }
}
