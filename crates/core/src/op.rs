//! The operation model: what a worker asks the inventory to do.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// The two state-changing operations the inventory supports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Sell,
    Restock,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Sell => "sell",
            OpKind::Restock => "restock",
        }
    }
}

/// One immutable operation against a single product.
///
/// Amounts are positive by construction; the fixed workloads never issue
/// zero-amount operations and builders take `u32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OpKind,
    pub product: ProductId,
    pub amount: u32,
}

impl Operation {
    pub fn sell(product: impl Into<ProductId>, amount: u32) -> Self {
        Self {
            kind: OpKind::Sell,
            product: product.into(),
            amount,
        }
    }

    pub fn restock(product: impl Into<ProductId>, amount: u32) -> Self {
        Self {
            kind: OpKind::Restock,
            product: product.into(),
            amount,
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({}, {})", self.kind.as_str(), self.product, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_kind_and_target() {
        let op = Operation::sell(3usize, 25);
        assert_eq!(op.kind, OpKind::Sell);
        assert_eq!(op.product, ProductId(3));
        assert_eq!(op.amount, 25);

        let op = Operation::restock(9usize, 20);
        assert_eq!(op.kind, OpKind::Restock);
    }

    #[test]
    fn display_reads_like_a_call() {
        assert_eq!(Operation::sell(0usize, 10).to_string(), "sell(0, 10)");
        assert_eq!(Operation::restock(5usize, 25).to_string(), "restock(5, 25)");
    }
}
