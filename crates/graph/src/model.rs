//! Normalized graph model
//!
//! The output contract for force-graph-style consumers: typed, colored,
//! sized nodes and an edge array serialized under the `links` key.

use crate::palette::NodeType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One normalized graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique within one graph
    pub id: String,

    /// Display label
    pub label: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Display size
    pub size: f64,

    /// Hex color resolved from the palette
    pub color: String,
}

/// One directed edge. Parallel edges are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,

    /// Optional relationship label carried through from the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Normalized graph. Every edge endpoint resolves to a declared node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub nodes: Vec<GraphNode>,

    /// Edge array named `links` for force-graph consumers
    pub links: Vec<GraphEdge>,
}

impl KnowledgeGraph {
    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Set of declared node ids
    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// True when every edge endpoint resolves to a declared node
    pub fn edges_resolve(&self) -> bool {
        let ids = self.node_ids();
        self.links
            .iter()
            .all(|e| ids.contains(e.source.as_str()) && ids.contains(e.target.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_resolve() {
        let graph = KnowledgeGraph {
            nodes: vec![
                GraphNode {
                    id: "a".into(),
                    label: "A".into(),
                    node_type: NodeType::Main,
                    size: 30.0,
                    color: "#ff0066".into(),
                },
                GraphNode {
                    id: "b".into(),
                    label: "B".into(),
                    node_type: NodeType::Finding,
                    size: 15.0,
                    color: "#ffcc00".into(),
                },
            ],
            links: vec![GraphEdge {
                source: "a".into(),
                target: "b".into(),
                relationship: None,
            }],
        };

        assert!(graph.edges_resolve());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let graph = KnowledgeGraph {
            nodes: vec![GraphNode {
                id: "paper".into(),
                label: "Research Paper".into(),
                node_type: NodeType::Main,
                size: 30.0,
                color: "#ff0066".into(),
            }],
            links: vec![],
        };

        let json = serde_json::to_value(&graph).unwrap();
        assert!(json["links"].is_array());
        assert_eq!(json["nodes"][0]["type"], "main");
        // No relationship key when the field is None
        let node_edge_free = serde_json::to_string(&graph).unwrap();
        assert!(!node_edge_free.contains("relationship"));
    }
}
