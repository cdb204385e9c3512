//! Shared rendering context
//!
//! Owns the output streams and the color policy for a command invocation.
//! Views and hooks receive clones of the context and call into it; they never
//! cache formatted state or mutate the policy. All writes are best-effort —
//! a failed write must never abort the parent operation.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use colored::Colorize;

use crate::diagnostics::{Diagnostics, Severity};

/// Rendering strategy for command output, chosen once at process start
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewMode {
    /// Human-readable text logs, suitable for a scrolling terminal
    Human,
    /// Machine-readable output (declared, not yet implemented for refresh)
    Json,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Output and error writers shared by everything that renders.
///
/// Writers live behind a mutex so hooks invoked during the run and the view
/// rendering afterwards serialize their access. Each line is flushed
/// immediately so progress appears as the operation proceeds.
#[derive(Clone)]
pub struct Streams {
    out: SharedWriter,
    err: SharedWriter,
}

impl Streams {
    /// Streams backed by the real process stdout/stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::from_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Streams backed by arbitrary writers (used by test harnesses).
    #[must_use]
    pub fn from_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            err: Arc::new(Mutex::new(err)),
        }
    }

    /// Write a line to the output stream.
    pub fn println(&self, text: &str) {
        Self::write_line(&self.out, text);
    }

    /// Write a line to the error stream.
    pub fn eprintln(&self, text: &str) {
        Self::write_line(&self.err, text);
    }

    fn write_line(writer: &SharedWriter, text: &str) {
        if let Ok(mut writer) = writer.lock() {
            // Best-effort: rendering problems must not abort the command.
            let _ = writeln!(writer, "{text}");
            let _ = writer.flush();
        }
    }
}

/// Shared rendering context: streams plus color policy
#[derive(Clone)]
pub struct View {
    streams: Streams,
    color: bool,
}

impl View {
    /// Create a context with the given streams and color policy.
    #[must_use]
    pub const fn new(streams: Streams, color: bool) -> Self {
        Self { streams, color }
    }

    /// The streams owned by this context.
    #[must_use]
    pub const fn streams(&self) -> &Streams {
        &self.streams
    }

    /// Render every diagnostic entry to the error stream, in order.
    ///
    /// No-op when the collection is empty. Entries are never filtered or
    /// summarized; detail text is indented under its summary line.
    pub fn diagnostics(&self, diags: &Diagnostics) {
        for diag in diags {
            let line = match diag.severity {
                Severity::Error => format!("{} {}", self.bad("Error:"), diag.summary),
                Severity::Warning => format!("{} {}", self.warn("Warning:"), diag.summary),
            };
            self.streams.eprintln(&line);

            if let Some(detail) = &diag.detail {
                for detail_line in detail.lines() {
                    self.streams.eprintln(&format!("  {detail_line}"));
                }
            }
        }
    }

    /// Emit the fixed usage hint for the named command.
    pub fn help_prompt(&self, command: &str) {
        self.streams.eprintln(&format!(
            "For usage instructions for the {command} command, run:\n  drift {command} --help"
        ));
    }

    pub(crate) fn good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn warn(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn bad(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn bold_good(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::testutil::test_view;

    #[test]
    fn test_view_mode_display() {
        assert_eq!(ViewMode::Human.to_string(), "human");
        assert_eq!(ViewMode::Json.to_string(), "json");
    }

    #[test]
    fn test_paint_helpers_plain_when_color_disabled() {
        let (view, _out, _err) = test_view();
        assert_eq!(view.good("ok"), "ok");
        assert_eq!(view.warn("hm"), "hm");
        assert_eq!(view.bad("no"), "no");
        assert_eq!(view.dim("shh"), "shh");
        assert_eq!(view.bold_good("yes"), "yes");
    }

    #[test]
    fn test_println_goes_to_output_stream() {
        let (view, out, err) = test_view();
        view.streams().println("hello");
        assert_eq!(out.contents(), "hello\n");
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_eprintln_goes_to_error_stream() {
        let (view, out, err) = test_view();
        view.streams().eprintln("oops");
        assert!(out.contents().is_empty());
        assert_eq!(err.contents(), "oops\n");
    }

    #[test]
    fn test_diagnostics_empty_emits_nothing() {
        let (view, out, err) = test_view();
        view.diagnostics(&Diagnostics::new());
        assert!(out.contents().is_empty());
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_diagnostics_renders_entries_in_order() {
        let (view, _out, err) = test_view();
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("state is stale", None));
        diags.push(Diagnostic::error(
            "Failed to refresh file.config",
            Some("permission denied".to_string()),
        ));

        view.diagnostics(&diags);

        let lines = err.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Warning: state is stale");
        assert_eq!(lines[1], "Error: Failed to refresh file.config");
        assert_eq!(lines[2], "  permission denied");
    }

    #[test]
    fn test_diagnostics_indents_multiline_detail() {
        let (view, _out, err) = test_view();
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::error(
            "bad state",
            Some("line one\nline two".to_string()),
        ));

        view.diagnostics(&diags);

        let lines = err.lines();
        assert_eq!(lines, vec!["Error: bad state", "  line one", "  line two"]);
    }

    #[test]
    fn test_help_prompt_names_the_command() {
        let (view, _out, err) = test_view();
        view.help_prompt("refresh");
        assert!(err.contents().contains("refresh"));
        assert!(err.contents().contains("--help"));
    }
}
