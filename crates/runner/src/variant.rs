//! Engine variant selection for the harness.

use core::str::FromStr;
use std::time::Duration;

use stocksim_inventory::{LockedInventory, RacyInventory, StockEngine};

use crate::plan::RunPlan;

/// Which operation executor a run uses. Everything else in the pipeline is
/// identical; this is the only thing the harness chooses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineVariant {
    /// No mutual exclusion; lost updates are the designed behavior.
    Racy,
    /// One mutex per cell plus a separate stats mutex.
    Locked,
}

impl EngineVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineVariant::Racy => "racy",
            EngineVariant::Locked => "locked",
        }
    }

    /// Build a fresh engine sized for `plan`.
    pub fn build(
        &self,
        plan: &RunPlan,
        processing_delay: Option<Duration>,
    ) -> Box<dyn StockEngine> {
        match self {
            EngineVariant::Racy => {
                let engine = RacyInventory::new(plan.product_count, plan.initial_stock);
                Box::new(match processing_delay {
                    Some(delay) => engine.with_processing_delay(delay),
                    None => engine,
                })
            }
            EngineVariant::Locked => {
                let engine = LockedInventory::new(plan.product_count, plan.initial_stock);
                Box::new(match processing_delay {
                    Some(delay) => engine.with_processing_delay(delay),
                    None => engine,
                })
            }
        }
    }
}

impl core::fmt::Display for EngineVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "racy" => Ok(EngineVariant::Racy),
            "locked" => Ok(EngineVariant::Locked),
            other => Err(format!("unknown variant '{other}' (expected racy|locked)")),
        }
    }
}
