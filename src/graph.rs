// src/graph.rs
//! Dependency graph construction and cycle detection.
//!
//! Simply put: circular migration dependencies are ordering errors.
//! This module detects them using an iterative depth-first search with an
//! explicit frame stack, so deep dependency chains cannot overflow the
//! call stack.

use std::collections::{HashMap, HashSet};

/// One elementary cycle, as a closed sequence of versions: `[A, B, C, A]`.
pub type Cycle = Vec<u64>;

/// Adjacency structure over migration versions.
///
/// Insertion order of keys is preserved so traversal roots (and therefore
/// reported cycles) are deterministic. Edges to unknown versions are
/// tolerated; they are simply never expanded as sources.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    order: Vec<u64>,
    edges: HashMap<u64, Vec<u64>>,
}

impl DependencyGraph {
    /// Builds a graph from `version -> depends_on` pairs.
    /// No referential integrity check is performed here.
    #[must_use]
    pub fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u64, Vec<u64>)>,
    {
        let mut graph = Self::default();
        for (version, deps) in pairs {
            graph.insert(version, deps);
        }
        graph
    }

    pub fn insert(&mut self, version: u64, deps: Vec<u64>) {
        match self.edges.get_mut(&version) {
            Some(existing) => existing.extend(deps),
            None => {
                self.order.push(version);
                self.edges.insert(version, deps);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn deps(&self, version: u64) -> &[u64] {
        self.edges.get(&version).map_or(&[], Vec::as_slice)
    }

    /// Finds all cycles reachable under a single-visit traversal.
    ///
    /// Each node is explored at most once across the whole run (it is marked
    /// processed on first visit). A node shared by two structurally distinct
    /// cycles behind a common prefix therefore reports only the
    /// first-discovered cycle; this mirrors the permissive intent of the
    /// check. Content-equal cycles are deduplicated.
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Cycle> {
        let mut processed: HashSet<u64> = HashSet::new();
        let mut cycles: Vec<Cycle> = Vec::new();

        for &root in &self.order {
            if processed.contains(&root) {
                continue;
            }
            self.traverse(root, &mut processed, &mut cycles);
        }

        cycles
    }

    fn traverse(&self, root: u64, processed: &mut HashSet<u64>, cycles: &mut Vec<Cycle>) {
        // (node, index of the next dependency to examine)
        let mut frames: Vec<(u64, usize)> = vec![(root, 0)];
        let mut path: Vec<u64> = vec![root];
        processed.insert(root);

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;
            let deps = self.deps(node);

            let Some(&dep) = deps.get(frame.1) else {
                frames.pop();
                path.pop();
                continue;
            };
            frame.1 += 1;

            if let Some(pos) = path.iter().position(|&v| v == dep) {
                let mut cycle = path[pos..].to_vec();
                cycle.push(dep); // close the loop
                if !cycles.contains(&cycle) {
                    cycles.push(cycle);
                }
            } else if processed.insert(dep) {
                frames.push((dep, 0));
                path.push(dep);
            }
        }
    }
}

/// Renders a cycle for reporting: `20240101 → 20240102 → 20240101`.
#[must_use]
pub fn describe_cycle(cycle: &[u64]) -> String {
    cycle
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}
