//! `stocksim-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no threads, no IO):
//! typed identifiers, the operation model, and the domain error type.

pub mod error;
pub mod id;
pub mod op;

pub use error::{StockError, StockResult};
pub use id::{ProductId, RunId, WorkerId};
pub use op::{OpKind, Operation};
