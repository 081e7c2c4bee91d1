//! Server-side tree layout for JSON documents.
//!
//! Computes x, y positions for every substructure of a JSON value. Siblings
//! are packed left-to-right into horizontal bands sized proportionally to the
//! number of scalar leaves beneath them, so subtrees never overlap. The UI
//! receives pre-positioned nodes and just renders them.

use serde_json::Value;
use tracing::debug;

use crate::error::LayoutError;
use crate::path::NodePath;
use crate::types::{LayoutEdge, LayoutNode, NodeData, NodeStyle, Position, TreeGraph};

/// Layout configuration constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal band width per scalar leaf.
    pub x_spacing: f64,
    /// Vertical spacing between depths.
    pub y_spacing: f64,
    /// Maximum container nesting accepted before layout refuses the document.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: 200.0,
            y_spacing: 150.0,
            max_depth: 512,
        }
    }
}

/// Layout engine: one instance per configuration, shareable across requests.
///
/// Stateless between calls; laying out the same document twice yields
/// identical output.
#[derive(Debug, Clone, Default)]
pub struct TreeLayoutBuilder {
    config: LayoutConfig,
}

/// Number of scalar leaves (including null) beneath a value. Empty containers
/// count zero; scalars count one. This is the unit of horizontal band
/// allocation.
pub fn subtree_width(value: &Value) -> u64 {
    match value {
        Value::Array(items) => items.iter().map(subtree_width).sum(),
        Value::Object(map) => map.values().map(subtree_width).sum(),
        _ => 1,
    }
}

impl TreeLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out a parsed JSON document as a top-down tree.
    ///
    /// Total over all JSON values; the only failure is the nesting-depth
    /// guard. Node and edge order is discovery order: each node first, then
    /// its children's contributions in member/element order.
    pub fn layout(&self, json: &Value) -> Result<TreeGraph, LayoutError> {
        self.check_depth(json)?;
        let graph = self.layout_value(json, None, &NodePath::root(), 0, 0.0);
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "layout complete"
        );
        Ok(graph)
    }

    /// Reject documents nested deeper than `max_depth` before the recursive
    /// pass runs. Iterative with an explicit work stack, so the check itself
    /// cannot overflow on adversarial input.
    fn check_depth(&self, json: &Value) -> Result<(), LayoutError> {
        let max = self.config.max_depth;
        let mut stack = vec![(json, 1usize)];
        while let Some((value, depth)) = stack.pop() {
            if depth > max {
                return Err(LayoutError::DepthExceeded { max });
            }
            match value {
                Value::Array(items) => stack.extend(items.iter().map(|v| (v, depth + 1))),
                Value::Object(map) => stack.extend(map.values().map(|v| (v, depth + 1))),
                _ => {}
            }
        }
        Ok(())
    }

    fn layout_value(
        &self,
        json: &Value,
        parent_id: Option<&str>,
        path: &NodePath,
        depth: usize,
        x_offset: f64,
    ) -> TreeGraph {
        let x_spacing = self.config.x_spacing;
        let y_spacing = self.config.y_spacing;

        let id = path.to_id();
        let band_width = subtree_width(json) as f64 * x_spacing;
        let node_x = x_offset + band_width / 2.0 - x_spacing / 2.0;
        let node_y = depth as f64 * y_spacing;

        let mut graph = TreeGraph::default();
        graph.nodes.push(LayoutNode {
            id: id.clone(),
            data: NodeData {
                label: if path.is_root() {
                    "Root".to_string()
                } else {
                    path.label()
                },
            },
            position: Position {
                x: node_x,
                y: node_y,
            },
            style: NodeStyle::branch(),
        });
        if let Some(parent) = parent_id {
            graph.edges.push(LayoutEdge::new(parent, id.clone()));
        }

        match json {
            Value::Array(items) => {
                let mut cursor = x_offset;
                for (index, item) in items.iter().enumerate() {
                    let child_path = path.child_index(index);
                    graph.extend(self.layout_value(item, Some(&id), &child_path, depth + 1, cursor));
                    cursor += subtree_width(item) as f64 * x_spacing;
                }
            }
            Value::Object(map) => {
                let mut cursor = x_offset;
                for (key, value) in map {
                    let child_path = path.child_key(key);
                    graph
                        .extend(self.layout_value(value, Some(&id), &child_path, depth + 1, cursor));
                    cursor += subtree_width(value) as f64 * x_spacing;
                }
            }
            scalar => {
                let value_id = path.value_id();
                graph.nodes.push(LayoutNode {
                    id: value_id.clone(),
                    data: NodeData {
                        label: scalar_label(scalar),
                    },
                    position: Position {
                        x: node_x,
                        y: node_y + y_spacing / 2.0,
                    },
                    style: NodeStyle::value(),
                });
                graph.edges.push(LayoutEdge::new(id, value_id));
            }
        }

        graph
    }
}

/// Displayed text for a scalar: strings unquoted, everything else as its JSON
/// literal (`null`, `true`, `42`, `1.5`). Numbers keep their parsed JSON
/// spelling, so `1.0` renders as `1.0` rather than collapsing to `1`.
fn scalar_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
