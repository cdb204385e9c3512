//! Outcome-counting hook
//!
//! Tallies per-resource outcomes without producing any output. The operation
//! renderer consumes the tally for the end-of-run summary line.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::hooks::{Hook, ResourceOutcome};

/// Final counts from a refresh run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshTally {
    /// Resources checked successfully (in sync or drifted)
    pub read: u32,
    /// Resources whose real-world state diverged from recorded state
    pub drifted: u32,
    /// Resources that could not be checked
    pub failed: u32,
}

/// Hook that counts resource outcomes.
///
/// Performs no I/O. Counters are atomics so the instance can be shared
/// between the engine (which increments during the run) and the view
/// (which queries the tally afterwards).
#[derive(Debug, Default)]
pub struct CountHook {
    read: AtomicU32,
    drifted: AtomicU32,
    failed: AtomicU32,
}

impl CountHook {
    /// Create a hook with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current counts.
    #[must_use]
    pub fn tally(&self) -> RefreshTally {
        RefreshTally {
            read: self.read.load(Ordering::Relaxed),
            drifted: self.drifted.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

impl Hook for CountHook {
    fn resource_complete(&self, _addr: &str, outcome: &ResourceOutcome) {
        match outcome {
            ResourceOutcome::InSync => {
                self.read.fetch_add(1, Ordering::Relaxed);
            }
            ResourceOutcome::Drifted { .. } => {
                self.read.fetch_add(1, Ordering::Relaxed);
                self.drifted.fetch_add(1, Ordering::Relaxed);
            }
            ResourceOutcome::Failed { .. } => {
                self.failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
