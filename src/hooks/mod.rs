//! Lifecycle hooks for refresh execution
//!
//! The engine drives a refresh by invoking every registered hook at defined
//! lifecycle points. Hooks are independent observers: each one receives every
//! event in emission order, and no hook may depend on its siblings or on the
//! order it was registered in.

pub mod count;
pub mod progress;

pub use count::{CountHook, RefreshTally};
pub use progress::ProgressHook;

/// Outcome of refreshing a single resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceOutcome {
    /// Recorded state matches the real-world resource
    InSync,
    /// The real-world resource diverged from recorded state
    Drifted {
        /// What diverged (e.g. "resource no longer exists")
        detail: String,
    },
    /// The resource could not be checked
    Failed {
        /// Why the check failed
        error: String,
    },
}

/// Observer invoked synchronously by the engine at lifecycle points.
///
/// All methods default to no-ops so implementations only handle the events
/// they care about. Methods take `&self`: hooks are shared between the view
/// and the engine, and any accumulated state belongs to the hook instance
/// (atomics or an owned `View` clone, never shared mutable state).
pub trait Hook: Send + Sync {
    /// The refresh operation is about to start.
    fn operation_begin(&self) {}

    /// A resource check is about to start.
    fn resource_begin(&self, _addr: &str) {}

    /// A resource check finished with the given outcome.
    fn resource_complete(&self, _addr: &str, _outcome: &ResourceOutcome) {}

    /// The refresh operation finished.
    fn operation_end(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NilHook;
    impl Hook for NilHook {}

    #[test]
    fn test_default_methods_are_no_ops() {
        // A hook with no overrides must accept the full event stream.
        let hook = NilHook;
        hook.operation_begin();
        hook.resource_begin("file.config");
        hook.resource_complete("file.config", &ResourceOutcome::InSync);
        hook.resource_complete(
            "file.config",
            &ResourceOutcome::Drifted {
                detail: "checksum changed".to_string(),
            },
        );
        hook.resource_complete(
            "file.config",
            &ResourceOutcome::Failed {
                error: "permission denied".to_string(),
            },
        );
        hook.operation_end();
    }

    #[test]
    fn test_outcome_equality() {
        assert_eq!(ResourceOutcome::InSync, ResourceOutcome::InSync);
        assert_ne!(
            ResourceOutcome::InSync,
            ResourceOutcome::Drifted {
                detail: "gone".to_string()
            }
        );
    }
}
