//! Strongly-typed identifiers used across the domain.
//!
//! `ProductId` and `WorkerId` are plain ordinals rather than UUIDs: products
//! index into a fixed cell array (and, in the locked engine, into the
//! matching guard array), and workers are numbered the way the fixed
//! workload numbers its threads. `RunId` identifies one whole simulation
//! run and is time-ordered.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Index of one product's stock cell within the inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub usize);

impl ProductId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for ProductId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map(Self)
    }
}

/// Ordinal of a worker within one run (1-based, matching the workload tables).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub u32);

impl core::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// Identifier of a single simulation run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RunId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for RunId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parses_and_displays_as_plain_index() {
        let id: ProductId = "7".parse().unwrap();
        assert_eq!(id, ProductId(7));
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.index(), 7);
    }

    #[test]
    fn worker_id_display_matches_thread_naming() {
        assert_eq!(WorkerId(3).to_string(), "worker-3");
    }

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(RunId::new(), RunId::new());
    }
}
