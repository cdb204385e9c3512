//! State reconciliation engine
//!
//! Parses recorded state and drives refresh runs, invoking registered hooks
//! at each lifecycle point. The view layer observes this module through the
//! [`Hook`](crate::hooks::Hook) contract and the report returned by
//! [`Refresher::run`].

pub mod refresh;
pub mod state;

pub use refresh::{file_checksum, RefreshReport, Refresher};
pub use state::{OutputValue, ResourceKind, ResourceRecord, StateFile};
