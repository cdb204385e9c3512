//! Refresh driver
//!
//! Walks every recorded resource, probes its real-world condition, and
//! invokes the registered hooks at each lifecycle point, in order, on the
//! caller's thread. Refresh never mutates recorded state or the resources
//! it inspects.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::engine::state::{OutputValue, ResourceKind, ResourceRecord, StateFile};
use crate::hooks::{Hook, ResourceOutcome};

/// What a refresh run produced: the recorded outputs plus any diagnostics.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    /// Named output values from the recorded state, unique by name
    pub outputs: BTreeMap<String, OutputValue>,
    /// Warnings and errors collected during the run, in order
    pub diagnostics: Diagnostics,
}

/// Drives a refresh over the recorded state.
pub struct Refresher {
    state: StateFile,
    hooks: Vec<Arc<dyn Hook>>,
}

impl Refresher {
    /// Create a refresher for the given state with no hooks registered.
    #[must_use]
    pub const fn new(state: StateFile) -> Self {
        Self {
            state,
            hooks: Vec::new(),
        }
    }

    /// Register the hooks to observe this run.
    ///
    /// Called exactly once before [`run`](Self::run). Every hook receives
    /// every event in emission order.
    pub fn register_hooks(&mut self, hooks: Vec<Arc<dyn Hook>>) {
        self.hooks = hooks;
    }

    /// Run the refresh: probe each resource and report outputs/diagnostics.
    #[must_use]
    pub fn run(&self) -> RefreshReport {
        let mut diagnostics = Diagnostics::new();

        if self.state.resources.is_empty() {
            diagnostics.push(Diagnostic::warning(
                "State contains no resources",
                Some("There is nothing to refresh.".to_string()),
            ));
        }

        for hook in &self.hooks {
            hook.operation_begin();
        }
        for resource in &self.state.resources {
            let addr = resource.addr();
            for hook in &self.hooks {
                hook.resource_begin(&addr);
            }

            let outcome = probe(resource);
            if let ResourceOutcome::Failed { error } = &outcome {
                diagnostics.push(Diagnostic::error(
                    format!("Failed to refresh {addr}"),
                    Some(error.clone()),
                ));
            }

            for hook in &self.hooks {
                hook.resource_complete(&addr, &outcome);
            }
        }
        for hook in &self.hooks {
            hook.operation_end();
        }

        RefreshReport {
            outputs: self.state.outputs.clone(),
            diagnostics,
        }
    }
}

/// Check one resource against the real world.
fn probe(resource: &ResourceRecord) -> ResourceOutcome {
    let metadata = match std::fs::metadata(&resource.path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return ResourceOutcome::Drifted {
                detail: "resource no longer exists".to_string(),
            };
        }
        Err(err) => {
            return ResourceOutcome::Failed {
                error: format!("cannot inspect {}: {err}", resource.path.display()),
            };
        }
    };

    match resource.kind {
        ResourceKind::File if !metadata.is_file() => {
            return ResourceOutcome::Drifted {
                detail: "expected a file, found something else".to_string(),
            };
        }
        ResourceKind::Dir if !metadata.is_dir() => {
            return ResourceOutcome::Drifted {
                detail: "expected a directory, found something else".to_string(),
            };
        }
        ResourceKind::File | ResourceKind::Dir => {}
    }

    // A recorded checksum governs content drift; the recorded mtime is only
    // a fallback when no checksum exists.
    if let Some(recorded) = &resource.checksum {
        return match file_checksum(&resource.path) {
            Ok(actual) if &actual == recorded => ResourceOutcome::InSync,
            Ok(_) => ResourceOutcome::Drifted {
                detail: "content checksum changed".to_string(),
            },
            Err(err) => ResourceOutcome::Failed {
                error: format!("{err:#}"),
            },
        };
    }

    if let Some(recorded_mtime) = resource.modified {
        if let Ok(current) = metadata.modified() {
            let current: DateTime<Utc> = current.into();
            if current > recorded_mtime {
                return ResourceOutcome::Drifted {
                    detail: "modified since last refresh".to_string(),
                };
            }
        }
    }

    ResourceOutcome::InSync
}

/// SHA-256 checksum of a file's contents, hex-encoded.
pub fn file_checksum<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
