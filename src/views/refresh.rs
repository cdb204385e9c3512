//! The refresh command's view
//!
//! Composes hooks, output rendering, and diagnostics into the reporting
//! surface for `drift refresh`. Exactly one view is selected per command
//! invocation, keyed by the requested presentation mode.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::diagnostics::Diagnostics;
use crate::engine::state::OutputValue;
use crate::hooks::{CountHook, Hook, ProgressHook};
use crate::views::operation::OperationView;
use crate::views::output::render_outputs;
use crate::views::view::{View, ViewMode};

/// Reporting surface for the refresh command.
///
/// The caller registers [`hooks`](Self::hooks) with the engine exactly once
/// before the run starts, and invokes [`outputs`](Self::outputs) and
/// [`diagnostics`](Self::diagnostics) after it ends. None of these
/// operations can fail: rendering problems must not abort the command.
pub trait RefreshView {
    /// Render the named output values. No output when the map is empty.
    fn outputs(&self, values: &BTreeMap<String, OutputValue>);

    /// A fresh operation-level renderer scoped to this run.
    fn operation(&self) -> OperationView;

    /// The hooks to register with the engine.
    ///
    /// Every hook receives every event; the members are independent
    /// observers with no ordering dependency between them.
    fn hooks(&self) -> Vec<Arc<dyn Hook>>;

    /// Render the collected diagnostics. No-op when empty.
    fn diagnostics(&self, diags: &Diagnostics);

    /// Emit the contextual usage hint for the refresh command.
    fn help_prompt(&self);
}

/// Select the refresh view for the requested presentation mode.
///
/// # Panics
///
/// Panics if no refresh view exists for `mode`. Requesting an unimplemented
/// mode is a caller bug, not a runtime condition to recover from.
#[must_use]
pub fn new_refresh(mode: ViewMode, in_automation: bool, view: View) -> Box<dyn RefreshView> {
    match mode {
        ViewMode::Human => Box::new(RefreshHuman::new(view, in_automation)),
        other => panic!("no refresh view implemented for view mode '{other}'"),
    }
}

/// Human-readable refresh view, suitable for a scrolling terminal.
pub struct RefreshHuman {
    view: View,
    in_automation: bool,
    count_hook: Arc<CountHook>,
}

impl RefreshHuman {
    /// Create the human view with a fresh count hook.
    #[must_use]
    pub fn new(view: View, in_automation: bool) -> Self {
        Self {
            view,
            in_automation,
            count_hook: Arc::new(CountHook::new()),
        }
    }
}

impl RefreshView for RefreshHuman {
    fn outputs(&self, values: &BTreeMap<String, OutputValue>) {
        if values.is_empty() {
            return;
        }
        self.view
            .streams()
            .println(&format!("\n{}\n", self.view.bold_good("Outputs:")));
        render_outputs(&self.view, values);
    }

    fn operation(&self) -> OperationView {
        OperationView::new(
            self.view.clone(),
            self.in_automation,
            Arc::clone(&self.count_hook),
        )
    }

    fn hooks(&self) -> Vec<Arc<dyn Hook>> {
        vec![
            Arc::clone(&self.count_hook) as Arc<dyn Hook>,
            Arc::new(ProgressHook::new(self.view.clone())) as Arc<dyn Hook>,
        ]
    }

    fn diagnostics(&self, diags: &Diagnostics) {
        self.view.diagnostics(diags);
    }

    fn help_prompt(&self) {
        self.view.help_prompt("refresh");
    }
}
