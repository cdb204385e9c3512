//! Diagnostics collected during a run
//!
//! Warnings and errors produced by the reconciliation engine are accumulated
//! into an ordered, append-only collection and rendered in full at the end of
//! the command. The view layer only formats entries — it never filters,
//! reorders, or escalates them.

/// Severity level for a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something went wrong — the command will exit non-zero
    Error,
    /// Something looks off but the run continued
    Warning,
}

/// A single warning or error produced during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the entry
    pub severity: Severity,
    /// One-line summary
    pub summary: String,
    /// Longer explanation (optional)
    pub detail: Option<String>,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    #[must_use]
    pub fn error(summary: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail,
        }
    }

    /// Create a warning-severity diagnostic.
    #[must_use]
    pub fn warning(summary: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail,
        }
    }
}

/// Ordered collection of diagnostics, append-only during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Entries are rendered in insertion order.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns true if no diagnostics were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if any entry has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
