// src/config.rs
//! Optional `migralint.toml` configuration.
//!
//! The `[dependencies]` table is how the externally supplied dependency
//! mapping reaches the CLI: keys are migration versions, values are the
//! versions they depend on. Library callers can pass a graph directly.

use crate::graph::DependencyGraph;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "migralint.toml";
pub const DEFAULT_MIGRATIONS_PATH: &str = "db/migrate";
pub const DEFAULT_EXTENSION: &str = "rb";

#[derive(Debug, Clone)]
pub struct Config {
    pub migrations_path: PathBuf,
    pub extension: String,
    pub strict: bool,
    /// version -> versions it depends on, insertion-ordered by key.
    pub dependencies: BTreeMap<u64, Vec<u64>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_path: PathBuf::from(DEFAULT_MIGRATIONS_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            strict: false,
            dependencies: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MigralintToml {
    migrations_path: Option<PathBuf>,
    extension: Option<String>,
    strict: Option<bool>,
    #[serde(default)]
    dependencies: BTreeMap<String, Vec<u64>>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and applies `migralint.toml` from the current
    /// directory if present. A missing or unparsable file leaves defaults
    /// untouched.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config(Path::new(CONFIG_FILE));
        config
    }

    pub fn load_local_config(&mut self, path: &Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        self.parse_toml(&content);
    }

    pub fn parse_toml(&mut self, content: &str) {
        let Ok(parsed) = toml::from_str::<MigralintToml>(content) else {
            return;
        };
        if let Some(path) = parsed.migrations_path {
            self.migrations_path = path;
        }
        if let Some(ext) = parsed.extension {
            self.extension = ext;
        }
        if let Some(strict) = parsed.strict {
            self.strict = strict;
        }
        for (key, deps) in parsed.dependencies {
            // Table keys arrive as strings; a non-numeric key parses as 0,
            // consistent with filename version parsing.
            let version = key.parse().unwrap_or(0);
            self.dependencies.insert(version, deps);
        }
    }

    /// Builds the dependency graph for cycle detection from the configured
    /// mapping.
    #[must_use]
    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph::build(self.dependencies.iter().map(|(v, d)| (*v, d.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.migrations_path, PathBuf::from("db/migrate"));
        assert_eq!(config.extension, "rb");
        assert!(!config.strict);
        assert!(config.dependencies.is_empty());
    }

    #[test]
    fn test_parse_full_toml() {
        let mut config = Config::new();
        config.parse_toml(
            r#"
migrations_path = "priv/migrations"
extension = "exs"
strict = true

[dependencies]
20240101000001 = [20240101000000]
"#,
        );
        assert_eq!(config.migrations_path, PathBuf::from("priv/migrations"));
        assert_eq!(config.extension, "exs");
        assert!(config.strict);
        assert_eq!(
            config.dependencies.get(&20_240_101_000_001),
            Some(&vec![20_240_101_000_000])
        );
    }

    #[test]
    fn test_invalid_toml_keeps_defaults() {
        let mut config = Config::new();
        config.parse_toml("not really toml [");
        assert_eq!(config.extension, "rb");
    }

    #[test]
    fn test_dependency_graph_from_config() {
        let mut config = Config::new();
        config.parse_toml(
            r"
[dependencies]
1 = [2]
2 = [1]
",
        );
        let cycles = config.dependency_graph().find_cycles();
        assert_eq!(cycles.len(), 1);
    }
}
