//! Graph types for JSON tree visualization.
//!
//! These types define the intermediate representation that is serialized to
//! JSON and consumed by the reactflow client. Field names and nesting match
//! the wire contract the client expects (`newNodes`/`newEdges`, camelCase
//! style keys), so the serde attributes here are load-bearing.

use serde::{Deserialize, Serialize};

/// A positioned node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub data: NodeData,
    pub position: Position,
    pub style: NodeStyle,
}

/// Display payload for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

/// Absolute canvas position, computed by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Inline CSS-ish styling hints for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub width: u32,
    pub padding: String,
    #[serde(rename = "textAlign")]
    pub text_align: String,
    /// Highlight color, set only on synthetic value nodes.
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl NodeStyle {
    /// Style for structural nodes (objects, arrays, keys).
    pub fn branch() -> Self {
        Self {
            width: 100,
            padding: "10px".to_string(),
            text_align: "center".to_string(),
            background_color: None,
        }
    }

    /// Style for synthetic scalar value nodes.
    pub fn value() -> Self {
        Self {
            background_color: Some("#FFD700".to_string()),
            ..Self::branch()
        }
    }
}

/// A directed edge from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl LayoutEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e-{source}-{target}"),
            source,
            target,
        }
    }
}

/// The full layout result for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeGraph {
    #[serde(rename = "newNodes")]
    pub nodes: Vec<LayoutNode>,
    #[serde(rename = "newEdges")]
    pub edges: Vec<LayoutEdge>,
}

impl TreeGraph {
    /// Append another graph's nodes and edges, preserving discovery order.
    pub fn extend(&mut self, other: TreeGraph) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
    }
}
