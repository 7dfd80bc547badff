//! Aggregate operation counters.

use serde::Serialize;

/// Counts of operations the engine has processed.
///
/// A sell that observed insufficient stock counts as failed; everything else
/// counts as completed. The counters are aggregate across all cells and are
/// guarded independently of the cells themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpStats {
    pub completed: u64,
    pub failed: u64,
}

impl OpStats {
    pub fn total(&self) -> u64 {
        self.completed + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_both_counters() {
        let stats = OpStats {
            completed: 95,
            failed: 5,
        };
        assert_eq!(stats.total(), 100);
    }
}
