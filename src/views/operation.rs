//! Operation-level rendering
//!
//! The per-command renderer for operation lifecycle notices and the
//! end-of-run summary. Scoped to one run's presentation mode and automation
//! flag; the refresh view hands it the count hook so the summary reflects
//! what the hooks observed.

use std::sync::Arc;

use crate::hooks::CountHook;
use crate::views::View;

/// Renders operation-level progress and summaries for one run.
pub struct OperationView {
    view: View,
    in_automation: bool,
    counts: Arc<CountHook>,
}

impl OperationView {
    pub(crate) const fn new(view: View, in_automation: bool, counts: Arc<CountHook>) -> Self {
        Self {
            view,
            in_automation,
            counts,
        }
    }

    /// Render the end-of-run summary line from the observed tallies.
    pub fn summary(&self) {
        let tally = self.counts.tally();
        let line = format!(
            "Refresh complete! Resources: {} read, {} drifted, {} failed.",
            tally.read, tally.drifted, tally.failed
        );

        let painted = if tally.failed > 0 {
            self.view.bad(&line)
        } else if tally.drifted > 0 {
            self.view.warn(&line)
        } else {
            self.view.bold_good(&line)
        };
        self.view.streams().println(&painted);
    }

    /// Announce that the operation is shutting down cleanly.
    pub fn stopping(&self) {
        self.view
            .streams()
            .println("Stopping the refresh operation...");
    }

    /// Announce that the operation was cancelled before completing.
    pub fn cancelled(&self) {
        self.view
            .streams()
            .println(&self.view.warn("Refresh cancelled."));
    }

    /// Announce an interrupt. In automation mode the interactive
    /// "interrupt again" affordance is suppressed.
    pub fn interrupted(&self) {
        self.view.streams().eprintln(&self.view.bad(
            "Interrupt received. Waiting for in-flight resource checks to finish.",
        ));
        if !self.in_automation {
            self.view
                .streams()
                .eprintln("Press Ctrl-C again to stop immediately.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{Hook, ResourceOutcome};
    use crate::testutil::test_view;

    fn operation(in_automation: bool) -> (OperationView, crate::testutil::CapturedOutput, crate::testutil::CapturedOutput) {
        let (view, out, err) = test_view();
        let op = OperationView::new(view, in_automation, Arc::new(CountHook::new()));
        (op, out, err)
    }

    #[test]
    fn test_summary_reflects_tally() {
        let (view, out, _err) = test_view();
        let counts = Arc::new(CountHook::new());
        counts.resource_complete("file.a", &ResourceOutcome::InSync);
        counts.resource_complete(
            "file.b",
            &ResourceOutcome::Drifted {
                detail: "changed".to_string(),
            },
        );

        let op = OperationView::new(view, false, counts);
        op.summary();

        assert_eq!(
            out.lines(),
            vec!["Refresh complete! Resources: 2 read, 1 drifted, 0 failed."]
        );
    }

    #[test]
    fn test_summary_with_no_events() {
        let (op, out, _err) = operation(false);
        op.summary();
        assert_eq!(
            out.lines(),
            vec!["Refresh complete! Resources: 0 read, 0 drifted, 0 failed."]
        );
    }

    #[test]
    fn test_interrupted_interactive_shows_ctrl_c_hint() {
        let (op, _out, err) = operation(false);
        op.interrupted();

        let lines = err.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Ctrl-C"));
    }

    #[test]
    fn test_interrupted_automation_suppresses_hint() {
        let (op, _out, err) = operation(true);
        op.interrupted();

        let lines = err.lines();
        assert_eq!(lines.len(), 1);
        assert!(!err.contents().contains("Ctrl-C"));
    }

    #[test]
    fn test_stopping_and_cancelled_notices() {
        let (op, out, _err) = operation(false);
        op.stopping();
        op.cancelled();

        assert_eq!(
            out.lines(),
            vec!["Stopping the refresh operation...", "Refresh cancelled."]
        );
    }
}
