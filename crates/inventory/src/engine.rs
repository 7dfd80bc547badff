//! The operation-executor seam shared by both engine variants.

use serde::Serialize;

use stocksim_core::{ProductId, StockResult};

use crate::stats::OpStats;

/// A point-in-time view of the whole inventory.
///
/// Only meaningful after all workers have joined; taking a snapshot while
/// operations are in flight reads each cell independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySnapshot {
    pub stock: Vec<i64>,
    pub stats: OpStats,
}

impl InventorySnapshot {
    pub fn stock_of(&self, product: ProductId) -> Option<i64> {
        self.stock.get(product.index()).copied()
    }
}

/// Executes `sell` and `restock` against a fixed array of stock cells.
///
/// Both engines implement identical operation semantics; they differ only in
/// whether the read-check-compute-write sequence runs under that cell's
/// guard. `Send + Sync` because one engine instance is shared by every
/// worker in a run.
pub trait StockEngine: Send + Sync {
    /// Short name used in logs and reports (`"racy"` / `"locked"`).
    fn variant(&self) -> &'static str;

    /// Number of stock cells.
    fn product_count(&self) -> usize;

    /// Decrease a product's stock by `amount`.
    ///
    /// Returns the new stock level, or `InsufficientStock` when the observed
    /// stock is below `amount` — in which case the cell is not mutated and
    /// the operation is recorded as failed.
    fn sell(&self, product: ProductId, amount: u32) -> StockResult<i64>;

    /// Increase a product's stock by `amount`. Always succeeds for a valid
    /// product and returns the new stock level.
    fn restock(&self, product: ProductId, amount: u32) -> StockResult<i64>;

    /// Read a product's current stock.
    ///
    /// Idempotent: with no intervening operations, repeated reads return the
    /// same value. The locked engine acquires the cell's guard so the read
    /// observes a settled value.
    fn stock_of(&self, product: ProductId) -> StockResult<i64>;

    /// Aggregate completed/failed counters.
    fn stats(&self) -> OpStats;

    /// Read every cell plus the counters.
    fn snapshot(&self) -> InventorySnapshot {
        let stock = (0..self.product_count())
            .map(|i| {
                self.stock_of(ProductId(i))
                    .expect("product index within product_count")
            })
            .collect();
        InventorySnapshot {
            stock,
            stats: self.stats(),
        }
    }
}
