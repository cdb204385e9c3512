//! Drift - infrastructure state reconciliation tool
//!
//! Drift reconciles recorded state with the real-world condition of managed
//! resources. The `refresh` command checks every recorded resource without
//! changing anything, streaming progress through lifecycle hooks and
//! rendering outputs and diagnostics when the run completes.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod engine;
pub mod hooks;
pub mod testutil;
pub mod views;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use engine::refresh::{file_checksum, RefreshReport, Refresher};
pub use engine::state::{OutputValue, ResourceKind, ResourceRecord, StateFile};
pub use hooks::{CountHook, Hook, ProgressHook, RefreshTally, ResourceOutcome};
pub use views::{new_refresh, OperationView, RefreshHuman, RefreshView, Streams, View, ViewMode};
