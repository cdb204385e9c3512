//! Live progress rendering hook
//!
//! Turns lifecycle events into immediate human-readable lines, colorized by
//! outcome category. Output is unbuffered: each line is written as the event
//! arrives, so users watching a terminal see progress during a long run.

use crate::hooks::{Hook, ResourceOutcome};
use crate::views::View;

/// Hook that writes one progress line per resource event.
pub struct ProgressHook {
    view: View,
}

impl ProgressHook {
    /// Create a progress hook rendering through the given context.
    #[must_use]
    pub const fn new(view: View) -> Self {
        Self { view }
    }
}

impl Hook for ProgressHook {
    fn resource_begin(&self, addr: &str) {
        self.view
            .streams()
            .println(&format!("{addr}: {}", self.view.dim("Refreshing state...")));
    }

    fn resource_complete(&self, addr: &str, outcome: &ResourceOutcome) {
        let line = match outcome {
            ResourceOutcome::InSync => {
                format!("{addr}: {}", self.view.good("In sync"))
            }
            ResourceOutcome::Drifted { detail } => {
                format!("{addr}: {} ({detail})", self.view.warn("Drift detected"))
            }
            ResourceOutcome::Failed { error } => {
                format!(
                    "{addr}: {}",
                    self.view.bad(&format!("Refresh failed: {error}"))
                )
            }
        };
        self.view.streams().println(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_view;

    #[test]
    fn test_begin_emits_one_line() {
        let (view, out, _err) = test_view();
        let hook = ProgressHook::new(view);

        hook.resource_begin("file.config");

        assert_eq!(out.lines(), vec!["file.config: Refreshing state..."]);
    }

    #[test]
    fn test_in_sync_line() {
        let (view, out, _err) = test_view();
        let hook = ProgressHook::new(view);

        hook.resource_complete("file.config", &ResourceOutcome::InSync);

        assert_eq!(out.lines(), vec!["file.config: In sync"]);
    }

    #[test]
    fn test_drifted_line_includes_detail() {
        let (view, out, _err) = test_view();
        let hook = ProgressHook::new(view);

        hook.resource_complete(
            "file.config",
            &ResourceOutcome::Drifted {
                detail: "content checksum changed".to_string(),
            },
        );

        assert_eq!(
            out.lines(),
            vec!["file.config: Drift detected (content checksum changed)"]
        );
    }

    #[test]
    fn test_failed_line_includes_error() {
        let (view, out, _err) = test_view();
        let hook = ProgressHook::new(view);

        hook.resource_complete(
            "file.config",
            &ResourceOutcome::Failed {
                error: "permission denied".to_string(),
            },
        );

        assert_eq!(
            out.lines(),
            vec!["file.config: Refresh failed: permission denied"]
        );
    }

    #[test]
    fn test_operation_events_emit_nothing() {
        let (view, out, err) = test_view();
        let hook = ProgressHook::new(view);

        hook.operation_begin();
        hook.operation_end();

        assert!(out.contents().is_empty());
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_one_line_per_event_in_order() {
        let (view, out, _err) = test_view();
        let hook = ProgressHook::new(view);

        for addr in ["file.a", "file.b", "file.c"] {
            hook.resource_complete(addr, &ResourceOutcome::InSync);
        }
        hook.resource_complete(
            "file.d",
            &ResourceOutcome::Failed {
                error: "gone wrong".to_string(),
            },
        );

        let lines = out.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("file.a:"));
        assert!(lines[1].starts_with("file.b:"));
        assert!(lines[2].starts_with("file.c:"));
        assert!(lines[3].starts_with("file.d:"));
    }
}
