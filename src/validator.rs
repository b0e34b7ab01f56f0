// src/validator.rs
//! The validation pipeline.
//!
//! Linear sweep: directory check, file discovery, per-file rules, version
//! sequencing, dependency cycles, aggregate. Everything upstream of the
//! aggregate is accumulate-and-continue; only the aggregate turns a
//! non-empty violation list into a hard failure.

use crate::discovery;
use crate::error::{MigralintError, Result};
use crate::graph::{describe_cycle, DependencyGraph};
use crate::rules::RuleEngine;
use crate::types::{MigrationFile, ValidationReport, Violation};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Validates one migrations directory. Each instance owns its violation
/// accumulator and traversal state; concurrent instances over different
/// directories need no coordination.
pub struct Validator {
    migrations_path: PathBuf,
    extension: String,
    dependencies: DependencyGraph,
}

impl Validator {
    #[must_use]
    pub fn new(migrations_path: impl Into<PathBuf>) -> Self {
        Self {
            migrations_path: migrations_path.into(),
            extension: "rb".to_string(),
            dependencies: DependencyGraph::default(),
        }
    }

    /// Overrides the migration file extension (default `rb`).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Supplies the external `version -> depends_on` mapping for cycle
    /// detection. Dependency inference from file content is out of scope;
    /// the caller owns that mapping.
    #[must_use]
    pub fn with_dependencies(mut self, graph: DependencyGraph) -> Self {
        self.dependencies = graph;
        self
    }

    /// Runs the full pipeline and returns a report. Never errors on rule
    /// failures; only I/O on discovered files can fail.
    ///
    /// # Errors
    /// Returns error if a discovered migration file cannot be read.
    pub fn run(&self) -> Result<ValidationReport> {
        let started = Instant::now();
        let mut violations = Vec::new();
        let mut files_checked = 0;

        if self.migrations_path.is_dir() {
            let files = discovery::discover(&self.migrations_path, &self.extension)?;
            files_checked = files.len();

            if files.is_empty() {
                violations.push(Violation::global(format!(
                    "No migration files found in {}",
                    self.migrations_path.display()
                )));
            }

            for file in &files {
                violations.extend(RuleEngine::check_file(file));
            }

            violations.extend(RuleEngine::check_versions(&files));
            self.check_cycles(&mut violations);
        } else {
            // Nothing downstream is meaningful without the directory.
            violations.push(Violation::global(format!(
                "Migrations directory not found at: {}",
                self.migrations_path.display()
            )));
        }

        Ok(ValidationReport {
            violations,
            files_checked,
            duration_ms: started.elapsed().as_millis(),
        })
    }

    /// Runs the full pipeline and fails if any violation was recorded.
    ///
    /// # Errors
    /// Returns `MigralintError::Validation` with all violation messages
    /// joined by newlines, or an I/O error from discovery.
    pub fn validate(&self) -> Result<ValidationReport> {
        let report = self.run()?;
        if report.passed() {
            Ok(report)
        } else {
            Err(MigralintError::Validation(report.joined_messages()))
        }
    }

    /// Checks a single file against the per-file rules and returns its
    /// violations without treating them as an error.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn validate_file(&self, path: &Path) -> Result<Vec<Violation>> {
        let content = fs::read_to_string(path).map_err(|e| MigralintError::io(e, path))?;
        let version = path
            .file_name()
            .and_then(|f| f.to_str())
            .map_or(0, discovery::parse_version);
        let file = MigrationFile {
            path: path.to_path_buf(),
            version,
            content,
        };
        Ok(RuleEngine::check_file(&file))
    }

    fn check_cycles(&self, violations: &mut Vec<Violation>) {
        for cycle in self.dependencies.find_cycles() {
            violations.push(Violation::global(format!(
                "circular dependency: {}",
                describe_cycle(&cycle)
            )));
        }
    }
}
