//! Inventory domain module.
//!
//! A fixed array of stock cells with two interchangeable engines behind the
//! [`StockEngine`] trait: [`RacyInventory`] performs the read-check-write
//! sequence with no mutual exclusion (losing updates under contention is its
//! designed behavior), while [`LockedInventory`] runs the same sequence under
//! one mutex per cell plus a separate mutex for the aggregate counters.

pub mod engine;
pub mod locked;
pub mod racy;
pub mod stats;

pub use engine::{InventorySnapshot, StockEngine};
pub use locked::LockedInventory;
pub use racy::RacyInventory;
pub use stats::OpStats;

/// Default number of products in an inventory.
pub const DEFAULT_PRODUCTS: usize = 10;

/// Default initial stock per product.
pub const DEFAULT_INITIAL_STOCK: i64 = 100;
