use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Subject a violation is attributed to: a single file or the whole set.
pub const GLOBAL_SUBJECT: &str = "global";

/// A single rule failure, attributed to one file or to the migration set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub subject: String,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn file(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn global(message: impl Into<String>) -> Self {
        Self {
            subject: GLOBAL_SUBJECT.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject == GLOBAL_SUBJECT {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.subject, self.message)
        }
    }
}

/// One migration script as read from disk. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct MigrationFile {
    pub path: PathBuf,
    pub version: u64,
    pub content: String,
}

impl MigrationFile {
    /// Filename used to attribute violations (`20240101000000_create_users.rb`).
    #[must_use]
    pub fn basename(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |f| {
                f.to_string_lossy().into_owned()
            })
    }
}

/// Aggregated results from one validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
    pub duration_ms: u128,
}

impl ValidationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// All violation messages joined by newlines, in discovery order.
    /// This is the payload of the aggregate validation error.
    #[must_use]
    pub fn joined_messages(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
