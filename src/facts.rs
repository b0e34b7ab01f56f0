// src/facts.rs
//! Fact extraction for a single migration file.
//!
//! This is deliberately pattern matching, not a parse of the migration DSL.
//! Cheap and resilient to minor formatting variance, at the cost of false
//! negatives on unusual styles (a `down` defined with exotic whitespace is
//! missed). Tests pin the current pattern semantics.

use regex::Regex;
use std::sync::LazyLock;

static DOWN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+def\s+down\b").unwrap_or_else(|_| panic!("Invalid Regex")));
static CREATE_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\s+create_table.*do.*\|t\|").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static TIMESTAMPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+t\.timestamps\b").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static RAW_AUTHOR_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+t\.integer\s+:author_id\b").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static AUTHOR_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+t\.references\s+:author.*foreign_key")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static ADD_FOREIGN_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*add_foreign_key\b.*author").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Structural facts derived from one migration's raw text.
/// Computed once per file; never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactSet {
    pub has_class: bool,
    pub has_apply: bool,
    pub has_rollback: bool,
    pub creates_table: bool,
    pub has_timestamps: bool,
    pub has_raw_author_column: bool,
    pub has_author_fk_constraint: bool,
}

impl FactSet {
    /// Extracts facts from raw migration text. Total: absence of a pattern
    /// simply yields a false fact, never an error.
    #[must_use]
    pub fn extract(content: &str) -> Self {
        Self {
            has_class: content.contains("class"),
            has_apply: content.contains("def change") || content.contains("def up"),
            has_rollback: DOWN_RE.is_match(content),
            creates_table: CREATE_TABLE_RE.is_match(content),
            has_timestamps: TIMESTAMPS_RE.is_match(content),
            has_raw_author_column: RAW_AUTHOR_ID_RE.is_match(content),
            has_author_fk_constraint: AUTHOR_REFERENCE_RE.is_match(content)
                || ADD_FOREIGN_KEY_RE.is_match(content),
        }
    }

    /// A table is created but the timestamp-columns directive is missing.
    #[must_use]
    pub fn table_missing_timestamps(&self) -> bool {
        self.creates_table && !self.has_timestamps
    }

    /// A raw integer author_id column exists with no matching constraint.
    #[must_use]
    pub fn missing_author_fk(&self) -> bool {
        self.has_raw_author_column && !self.has_author_fk_constraint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = r"
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
    fn test_complete_migration_facts() {
        let facts = FactSet::extract(COMPLETE);
        assert!(facts.has_class);
        assert!(facts.has_apply);
        assert!(facts.has_rollback);
        assert!(facts.creates_table);
        assert!(facts.has_timestamps);
        assert!(!facts.table_missing_timestamps());
        assert!(!facts.missing_author_fk());
    }

    #[test]
    fn test_empty_content_yields_no_facts() {
        let facts = FactSet::extract("");
        assert_eq!(facts, FactSet::default());
    }

    #[test]
    fn test_up_counts_as_apply() {
        let facts = FactSet::extract("class M\n  def up\n  end\nend\n");
        assert!(facts.has_apply);
    }

    #[test]
    fn test_down_requires_leading_whitespace() {
        // Known blind spot: `def down` at column zero is not recognized.
        let facts = FactSet::extract("def down\nend\n");
        assert!(!facts.has_rollback);
    }

    #[test]
    fn test_create_table_without_timestamps() {
        let content = r"
class CreateUsers < ActiveRecord::Migration[7.0]
  def change
    create_table :users do |t|
      t.string :name
    end
  end
end
";
        let facts = FactSet::extract(content);
        assert!(facts.creates_table);
        assert!(!facts.has_timestamps);
        assert!(facts.table_missing_timestamps());
    }

    #[test]
    fn test_raw_author_id_without_constraint() {
        let content = r"
class CreatePosts < ActiveRecord::Migration[7.0]
  def change
    create_table :posts do |t|
      t.integer :author_id
      t.timestamps
    end
  end
end
";
        let facts = FactSet::extract(content);
        assert!(facts.has_raw_author_column);
        assert!(!facts.has_author_fk_constraint);
        assert!(facts.missing_author_fk());
    }

    #[test]
    fn test_references_shorthand_satisfies_constraint() {
        let content = r"
    create_table :posts do |t|
      t.references :author, foreign_key: { to_table: :users }
      t.timestamps
    end
";
        let facts = FactSet::extract(content);
        assert!(facts.has_author_fk_constraint);
        assert!(!facts.missing_author_fk());
    }

    #[test]
    fn test_explicit_add_foreign_key_satisfies_constraint() {
        let content = r"
    create_table :posts do |t|
      t.integer :author_id
      t.timestamps
    end
    add_foreign_key :posts, :users, column: :author_id
";
        let facts = FactSet::extract(content);
        assert!(facts.has_raw_author_column);
        assert!(facts.has_author_fk_constraint);
        assert!(!facts.missing_author_fk());
    }
}
