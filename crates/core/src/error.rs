//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// The taxonomy is deliberately narrow: insufficient stock is an expected
/// business outcome (recorded as a failed operation, never a fault), and
/// unknown products only arise from malformed input at the boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StockError {
    /// A sell observed less stock than it requested. The cell is untouched.
    #[error("insufficient stock for product {product}: {available} < {requested}")]
    InsufficientStock {
        product: ProductId,
        available: i64,
        requested: u32,
    },

    /// The product id is outside the inventory's cell range.
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    /// An operation amount failed validation (zero).
    #[error("operation amount must be positive")]
    ZeroAmount,
}

impl StockError {
    pub fn insufficient(product: ProductId, available: i64, requested: u32) -> Self {
        Self::InsufficientStock {
            product,
            available,
            requested,
        }
    }

    pub fn unknown_product(product: ProductId) -> Self {
        Self::UnknownProduct(product)
    }
}
