//! Drift - infrastructure state reconciliation tool
//!
//! CLI entry point for drift commands.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use drift::diagnostics::{Diagnostic, Diagnostics};
use drift::engine::refresh::{RefreshReport, Refresher};
use drift::engine::state::StateFile;
use drift::views::{self, Streams, View, ViewMode};

/// Infrastructure state reconciliation tool
///
/// Reconciles recorded state with the real-world condition of managed
/// resources, streaming per-resource progress as it goes.
#[derive(Parser, Debug)]
#[command(name = "drift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every recorded resource against the real world without
    /// changing anything
    Refresh {
        /// Path to the recorded state file
        #[arg(long, default_value = "drift.toml")]
        state: PathBuf,

        /// Rendering mode for command output
        #[arg(long, value_enum, default_value_t = ViewMode::Human)]
        view: ViewMode,

        /// Run non-interactively, suppressing interactive affordances
        #[arg(long)]
        automation: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Refresh {
            state,
            view,
            automation,
            no_color,
        } => run_refresh(&state, view, automation, no_color),
    };

    std::process::exit(code);
}

/// Run the refresh command end-to-end and return the process exit code.
fn run_refresh(state_path: &Path, mode: ViewMode, automation: bool, no_color: bool) -> i32 {
    let view = View::new(Streams::stdio(), !no_color);
    let refresh_view = views::new_refresh(mode, automation, view);

    let state = match StateFile::from_path(state_path) {
        Ok(state) => state,
        Err(err) => {
            let mut diags = Diagnostics::new();
            diags.push(Diagnostic::error(
                format!("Failed to load state from '{}'", state_path.display()),
                Some(format!("{err:#}")),
            ));
            refresh_view.diagnostics(&diags);
            refresh_view.help_prompt();
            return 1;
        }
    };

    let mut engine = Refresher::new(state);
    engine.register_hooks(refresh_view.hooks());

    let operation = refresh_view.operation();
    let report = engine.run();

    operation.summary();
    refresh_view.outputs(&report.outputs);
    refresh_view.diagnostics(&report.diagnostics);

    exit_code(&report)
}

/// Exit code for a completed run: non-zero when any resource failed to
/// refresh.
fn exit_code(report: &RefreshReport) -> i32 {
    i32::from(report.diagnostics.has_errors())
}
