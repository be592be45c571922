//! Cycle detection over tool-to-tool dependency edges.
//!
//! Depth-first traversal with two marks per node: *visited* (ever entered)
//! and *on stack* (part of the current path). Roots are visited in
//! insertion order. Reaching a node that is on the stack closes a cycle;
//! the reported trail is the path from the root plus the repeated node, and
//! traversal of that root stops there.

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::core::string::arrow_trail;

/// A detected cycle, as the trail walked from its traversal root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCycle {
    /// Tool names from the root to the repeated node (inclusive, repeated last)
    pub path: Vec<String>,
}

impl DependencyCycle {
    /// Arrow-separated trail, e.g. `A -> B -> A`
    pub fn trail(&self) -> String {
        arrow_trail(&self.path)
    }
}

impl std::fmt::Display for DependencyCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.trail())
    }
}

/// An edge pointing at a tool that does not exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDependency {
    pub tool: String,
    pub dependency: String,
}

/// Tool dependency graph, borrowed from the registered definitions
#[derive(Debug, Default)]
pub struct DependencyGraph<'a> {
    edges: IndexMap<&'a str, &'a [String]>,
}

impl<'a> DependencyGraph<'a> {
    pub fn from_edges(edges: impl IntoIterator<Item = (&'a str, &'a [String])>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    pub fn contains(&self, tool: &str) -> bool {
        self.edges.contains_key(tool)
    }

    /// Dependencies naming tools outside the graph, in declaration order
    pub fn dangling(&self) -> Vec<DanglingDependency> {
        self.edges
            .iter()
            .flat_map(|(tool, deps)| {
                deps.iter()
                    .filter(|dep| !self.contains(dep))
                    .map(|dep| DanglingDependency {
                        tool: tool.to_string(),
                        dependency: dep.clone(),
                    })
            })
            .collect()
    }

    /// Find at most one cycle per traversal root.
    ///
    /// Dangling edges are skipped.
    pub fn find_cycles(&self) -> Vec<DependencyCycle> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut cycles = Vec::new();

        for &root in self.edges.keys() {
            if visited.contains(root) {
                continue;
            }
            let mut on_stack = HashSet::new();
            let mut path = Vec::new();
            if let Some(cycle) = self.visit(root, &mut visited, &mut on_stack, &mut path) {
                cycles.push(cycle);
            }
        }

        cycles
    }

    fn visit(
        &self,
        node: &'a str,
        visited: &mut HashSet<&'a str>,
        on_stack: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> Option<DependencyCycle> {
        visited.insert(node);
        on_stack.insert(node);
        path.push(node);

        let deps = self.edges.get(node).copied().unwrap_or_default();
        for dep in deps {
            let Some((&dep, _)) = self.edges.get_key_value(dep.as_str()) else {
                continue;
            };
            if on_stack.contains(dep) {
                let mut trail: Vec<String> = path.iter().map(|s| s.to_string()).collect();
                trail.push(dep.to_string());
                return Some(DependencyCycle { path: trail });
            }
            if !visited.contains(dep)
                && let Some(cycle) = self.visit(dep, visited, on_stack, path)
            {
                return Some(cycle);
            }
        }

        path.pop();
        on_stack.remove(node);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(spec: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
        spec.iter()
            .map(|(n, deps)| (n.to_string(), deps.iter().map(|d| d.to_string()).collect()))
            .collect()
    }

    fn cycles(spec: &[(&str, &[&str])]) -> Vec<String> {
        let owned = graph_of(spec);
        let graph =
            DependencyGraph::from_edges(owned.iter().map(|(n, d)| (n.as_str(), d.as_slice())));
        graph.find_cycles().iter().map(|c| c.trail()).collect()
    }

    #[test]
    fn test_acyclic_graph() {
        assert!(cycles(&[("A", &["B"]), ("B", &["C"]), ("C", &[])]).is_empty());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        assert!(cycles(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"]), ("D", &[])]).is_empty());
    }

    #[test]
    fn test_two_node_cycle() {
        assert_eq!(cycles(&[("A", &["B"]), ("B", &["A"])]), ["A -> B -> A"]);
    }

    #[test]
    fn test_self_loop() {
        let found = cycles(&[("A", &["A"])]);
        assert_eq!(found, ["A -> A"]);
    }

    #[test]
    fn test_trail_starts_at_root() {
        let found = cycles(&[("R", &["A"]), ("A", &["B"]), ("B", &["A"])]);
        assert_eq!(found, ["R -> A -> B -> A"]);
    }

    #[test]
    fn test_one_cycle_per_root() {
        // Both A->B->A and A->C->A exist; traversal from A stops at the first.
        let found = cycles(&[("A", &["B", "C"]), ("B", &["A"]), ("C", &["A"])]);
        assert_eq!(found, ["A -> B -> A"]);
    }

    #[test]
    fn test_independent_cycles_reported_per_root() {
        let found = cycles(&[("A", &["B"]), ("B", &["A"]), ("X", &["X"])]);
        assert_eq!(found, ["A -> B -> A", "X -> X"]);
    }

    #[test]
    fn test_no_spurious_cycle_after_abandoned_traversal() {
        // Traversal from A stops inside B's self-loop; C reaches B afterwards
        // and must not report a cycle through it.
        let found = cycles(&[("A", &["B"]), ("B", &["B"]), ("C", &["B"])]);
        assert_eq!(found, ["A -> B -> B"]);
    }

    #[test]
    fn test_dangling_edges_skipped_and_listed() {
        let owned = graph_of(&[("A", &["Ghost", "B"]), ("B", &[])]);
        let graph =
            DependencyGraph::from_edges(owned.iter().map(|(n, d)| (n.as_str(), d.as_slice())));

        assert!(graph.find_cycles().is_empty());
        assert_eq!(
            graph.dangling(),
            [DanglingDependency {
                tool: "A".to_string(),
                dependency: "Ghost".to_string()
            }]
        );
    }

    #[test]
    fn test_cycle_display() {
        let cycle = DependencyCycle {
            path: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(cycle.to_string(), "A -> B -> A");
    }
}
