//! View selection and rendering
//!
//! Each command selects one view implementation per invocation based on the
//! requested presentation mode. Views compose hooks for streaming progress
//! with final output and diagnostics rendering.

pub mod operation;
pub mod output;
pub mod refresh;
pub mod view;

pub use operation::OperationView;
pub use output::render_outputs;
pub use refresh::{new_refresh, RefreshHuman, RefreshView};
pub use view::{Streams, View, ViewMode};
