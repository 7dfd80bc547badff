//! The run plan: deterministic initial state plus fixed operation lists.

use std::time::Duration;

use stocksim_core::{OpKind, Operation, ProductId};
use stocksim_inventory::{DEFAULT_INITIAL_STOCK, DEFAULT_PRODUCTS};

// The standard workload: four groups of five identical workers. Groups
// alternate selling and restocking over products 0-4, then 5-9.
const SELLS_A: [(usize, u32); 5] = [(0, 10), (1, 15), (2, 20), (3, 5), (4, 25)];
const RESTOCKS_A: [(usize, u32); 5] = [(0, 30), (1, 20), (2, 40), (3, 10), (4, 35)];
const SELLS_B: [(usize, u32); 5] = [(5, 15), (6, 20), (7, 10), (8, 25), (9, 15)];
const RESTOCKS_B: [(usize, u32); 5] = [(5, 25), (6, 30), (7, 15), (8, 40), (9, 20)];

const WORKERS_PER_GROUP: usize = 5;

/// Everything a run needs decided up front: inventory dimensions, one
/// operation list per worker, and the optional pause a worker takes between
/// its operations (timing only, never correctness).
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub product_count: usize,
    pub initial_stock: i64,
    pub workers: Vec<Vec<Operation>>,
    pub pause_between_ops: Option<Duration>,
}

impl RunPlan {
    pub fn new(product_count: usize, initial_stock: i64, workers: Vec<Vec<Operation>>) -> Self {
        Self {
            product_count,
            initial_stock,
            workers,
            pause_between_ops: None,
        }
    }

    /// The fixed 20-worker workload: 10 products at 100 units each, four
    /// groups of five workers, five operations per worker.
    pub fn standard() -> Self {
        let mut workers = Vec::with_capacity(4 * WORKERS_PER_GROUP);

        for _ in 0..WORKERS_PER_GROUP {
            workers.push(SELLS_A.iter().map(|&(p, n)| Operation::sell(p, n)).collect());
        }
        for _ in 0..WORKERS_PER_GROUP {
            workers.push(
                RESTOCKS_A
                    .iter()
                    .map(|&(p, n)| Operation::restock(p, n))
                    .collect(),
            );
        }
        for _ in 0..WORKERS_PER_GROUP {
            workers.push(SELLS_B.iter().map(|&(p, n)| Operation::sell(p, n)).collect());
        }
        for _ in 0..WORKERS_PER_GROUP {
            workers.push(
                RESTOCKS_B
                    .iter()
                    .map(|&(p, n)| Operation::restock(p, n))
                    .collect(),
            );
        }

        Self::new(DEFAULT_PRODUCTS, DEFAULT_INITIAL_STOCK, workers)
    }

    pub fn with_pause_between_ops(mut self, pause: Duration) -> Self {
        self.pause_between_ops = Some(pause);
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn total_operations(&self) -> usize {
        self.workers.iter().map(Vec::len).sum()
    }

    /// Sum of sell amounts targeting `product` across all workers.
    pub fn total_sells(&self, product: ProductId) -> i64 {
        self.total_amount(product, OpKind::Sell)
    }

    /// Sum of restock amounts targeting `product` across all workers.
    pub fn total_restocks(&self, product: ProductId) -> i64 {
        self.total_amount(product, OpKind::Restock)
    }

    fn total_amount(&self, product: ProductId, kind: OpKind) -> i64 {
        self.workers
            .iter()
            .flatten()
            .filter(|op| op.product == product && op.kind == kind)
            .map(|op| i64::from(op.amount))
            .sum()
    }

    /// Closed-form expected final stock for `product`, when one exists.
    ///
    /// When the initial stock covers every sell targeting the cell, no sell
    /// can fail under any interleaving (restocks only add), so the final
    /// value is `initial + Σrestocks − Σsells` regardless of schedule.
    /// Otherwise some interleavings make a sell legitimately fail and the
    /// final value depends on the schedule; no expectation is derivable from
    /// the plan alone.
    pub fn expected_stock(&self, product: ProductId) -> Option<i64> {
        let sells = self.total_sells(product);
        if sells > self.initial_stock {
            return None;
        }
        Some(self.initial_stock + self.total_restocks(product) - sells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_matches_the_operation_tables() {
        let plan = RunPlan::standard();

        assert_eq!(plan.product_count, 10);
        assert_eq!(plan.initial_stock, 100);
        assert_eq!(plan.worker_count(), 20);
        assert_eq!(plan.total_operations(), 100);
        assert!(plan.workers.iter().all(|ops| ops.len() == 5));

        // First sell group and first restock group, literally.
        assert_eq!(plan.workers[0][0], Operation::sell(0usize, 10));
        assert_eq!(plan.workers[4][4], Operation::sell(4usize, 25));
        assert_eq!(plan.workers[5][0], Operation::restock(0usize, 30));
        assert_eq!(plan.workers[19][4], Operation::restock(9usize, 20));
    }

    #[test]
    fn per_product_totals_follow_from_the_tables() {
        let plan = RunPlan::standard();

        assert_eq!(plan.total_sells(ProductId(0)), 50);
        assert_eq!(plan.total_restocks(ProductId(0)), 150);
        assert_eq!(plan.total_sells(ProductId(5)), 75);
        assert_eq!(plan.total_restocks(ProductId(5)), 125);
    }

    #[test]
    fn expected_stock_is_closed_form_where_sells_cannot_fail() {
        let plan = RunPlan::standard();

        assert_eq!(plan.expected_stock(ProductId(0)), Some(200));
        assert_eq!(plan.expected_stock(ProductId(5)), Some(150));
        // Product 2 sells exactly its initial stock; still failure-free.
        assert_eq!(plan.expected_stock(ProductId(2)), Some(200));
    }

    #[test]
    fn expected_stock_is_undefined_where_a_sell_can_fail() {
        let plan = RunPlan::standard();

        // Products 4 and 8 sell 125 against 100 initial: under some
        // interleavings a sell fails, so no schedule-independent value.
        assert_eq!(plan.expected_stock(ProductId(4)), None);
        assert_eq!(plan.expected_stock(ProductId(8)), None);
    }
}
