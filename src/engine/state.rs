//! Recorded state parser
//!
//! Parses the `drift.toml` state file into resource records and named output
//! values. The refresh command treats the state file as read-only.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a managed resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A regular file
    File,
    /// A directory
    Dir,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Dir => write!(f, "dir"),
        }
    }
}

/// A single recorded resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Unique name for this resource
    pub name: String,
    /// What kind of resource this is
    pub kind: ResourceKind,
    /// Where the resource lives
    pub path: PathBuf,
    /// SHA-256 content checksum recorded at the last refresh (files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Modification time recorded at the last refresh.
    /// Only consulted when no checksum is recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl ResourceRecord {
    /// Address of this resource as shown in progress lines, e.g. `file.config`.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}.{}", self.kind, self.name)
    }
}

/// A named result value recorded in state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputValue {
    /// The value itself
    pub value: serde_json::Value,
    /// Whether the value should be hidden in rendered output
    #[serde(default)]
    pub sensitive: bool,
}

/// Top-level recorded state parsed from drift.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateFile {
    /// Monotonic state serial, bumped on every write
    #[serde(default)]
    pub serial: u64,
    /// Recorded resources
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceRecord>,
    /// Named output values, unique by name
    #[serde(default, rename = "output")]
    pub outputs: BTreeMap<String, OutputValue>,
}

impl StateFile {
    /// Parse a state file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse state file content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let state: Self = toml::from_str(content).context("Failed to parse state file")?;
        state.validate()?;
        Ok(state)
    }

    /// Validate the recorded state
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for resource in &self.resources {
            if resource.name.trim().is_empty() {
                bail!("Resource name cannot be empty");
            }
            if !seen.insert(&resource.name) {
                bail!("Duplicate resource name: '{}'", resource.name);
            }
        }
        Ok(())
    }
}
