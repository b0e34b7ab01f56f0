// src/rules.rs
//! Rule evaluation over extracted fact sets.
//!
//! Per-file rules run in a fixed order so output is reproducible for the
//! same file set in the same listing order. Rules never fail; they only
//! append violations. The orchestrator decides what a non-empty violation
//! list means.

use crate::facts::FactSet;
use crate::types::{MigrationFile, Violation};

pub struct RuleEngine;

impl RuleEngine {
    /// Evaluates every per-file rule against one migration.
    /// Each rule contributes at most one violation, in listed order.
    #[must_use]
    pub fn check_file(file: &MigrationFile) -> Vec<Violation> {
        let facts = FactSet::extract(&file.content);
        let name = file.basename();
        let mut violations = Vec::new();

        if !facts.has_class {
            violations.push(Violation::file(&name, "Missing class definition"));
        }
        if !facts.has_apply {
            violations.push(Violation::file(&name, "Missing 'up' method"));
        }
        if !facts.has_rollback {
            violations.push(Violation::file(&name, "Missing down method for rollback"));
        }
        if facts.table_missing_timestamps() {
            violations.push(Violation::file(&name, "Missing timestamps"));
        }
        if facts.missing_author_fk() {
            violations.push(Violation::file(&name, "Missing foreign key for author_id"));
        }

        violations
    }

    /// Set-wide rule: no two files may share a version identifier.
    ///
    /// Policy: uniqueness only, not strict contiguity. Gaps between versions
    /// are fine; timestamps are not contiguous in practice.
    ///
    /// Emits a single aggregate violation carrying the full expected
    /// (deduplicated) and found sequences for diagnosability.
    #[must_use]
    pub fn check_versions(files: &[MigrationFile]) -> Option<Violation> {
        let mut found: Vec<u64> = files.iter().map(|f| f.version).collect();
        found.sort_unstable();

        let mut expected = found.clone();
        expected.dedup();

        if found == expected {
            return None;
        }

        Some(Violation::global(format!(
            "Migration versions are not in sequential order\nExpected: {}\nFound: {}",
            join_versions(&expected),
            join_versions(&found)
        )))
    }
}

fn join_versions(versions: &[u64]) -> String {
    versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn migration(name: &str, version: u64, content: &str) -> MigrationFile {
        MigrationFile {
            path: PathBuf::from(name),
            version,
            content: content.to_string(),
        }
    }

    const VALID: &str = r"
class CreateUsers < ActiveRecord::Migration[7.0]
  def change
    create_table :users do |t|
      t.string :name
      t.timestamps
    end
  end

  def down
    drop_table :users
  end
end
";

    #[test]
    fn test_valid_file_is_clean() {
        let file = migration("20240101000000_create_users.rb", 20_240_101_000_000, VALID);
        assert!(RuleEngine::check_file(&file).is_empty());
    }

    #[test]
    fn test_rules_are_independent() {
        // Satisfies everything except the timestamps rule: exactly one violation.
        let content = r"
class CreateUsers < ActiveRecord::Migration[7.0]
  def change
    create_table :users do |t|
      t.string :name
    end
  end

  def down
    drop_table :users
  end
end
";
        let file = migration("20240101000000_create_users.rb", 20_240_101_000_000, content);
        let violations = RuleEngine::check_file(&file);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "20240101000000_create_users.rb: Missing timestamps"
        );
    }

    #[test]
    fn test_empty_file_fails_structural_rules() {
        let file = migration("bad.rb", 0, "");
        let messages: Vec<String> = RuleEngine::check_file(&file)
            .iter()
            .map(|v| v.message.clone())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Missing class definition",
                "Missing 'up' method",
                "Missing down method for rollback",
            ]
        );
    }

    #[test]
    fn test_unique_versions_pass() {
        let files = vec![
            migration("000000_a.rb", 0, VALID),
            migration("000001_b.rb", 1, VALID),
            migration("000005_c.rb", 5, VALID), // gaps are allowed
        ];
        assert!(RuleEngine::check_versions(&files).is_none());
    }

    #[test]
    fn test_duplicate_versions_aggregate_violation() {
        let files = vec![
            migration("20240101000000_a.rb", 20_240_101_000_000, VALID),
            migration("20240101000000_b.rb", 20_240_101_000_000, VALID),
        ];
        let violation = RuleEngine::check_versions(&files).expect("duplicate must be flagged");
        assert!(violation.message.contains("not in sequential order"));
        assert!(violation
            .message
            .contains("Expected: 20240101000000\nFound: 20240101000000, 20240101000000"));
    }

    #[test]
    fn test_empty_set_passes_versions() {
        assert!(RuleEngine::check_versions(&[]).is_none());
    }
}
