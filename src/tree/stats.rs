//! Summary statistics of a constructed game tree.

use serde::{Deserialize, Serialize};

/// Counts describing a finished [`GameTree`](crate::tree::GameTree).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Distinct nodes in the arena.
    pub nodes: usize,

    /// Nodes where the game is over.
    pub terminal_nodes: usize,

    /// Non-terminal nodes with at least one legal action.
    pub decision_nodes: usize,

    /// Non-terminal nodes without any legal action.
    pub dead_ends: usize,

    /// Parent-to-child edges across the whole graph.
    pub edges: usize,

    /// Edges that landed on a node created by an earlier expansion.
    pub shared_edges: usize,

    /// Distinct information sets per player.
    pub info_sets: [usize; 2],

    /// Total entries across each player's information-set lists.
    pub info_set_entries: [usize; 2],
}

impl TreeStats {
    /// Fraction of edges that were merged into an existing node.
    pub fn sharing_ratio(&self) -> f64 {
        if self.edges == 0 {
            0.0
        } else {
            self.shared_edges as f64 / self.edges as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharing_ratio() {
        let empty = TreeStats::default();
        assert_eq!(empty.sharing_ratio(), 0.0);

        let stats = TreeStats {
            edges: 8,
            shared_edges: 2,
            ..Default::default()
        };
        assert_eq!(stats.sharing_ratio(), 0.25);
    }

    #[test]
    fn test_stats_json() {
        let stats = TreeStats {
            nodes: 10,
            info_sets: [3, 3],
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"nodes\":10"));
        assert!(json.contains("\"info_sets\":[3,3]"));
    }
}
