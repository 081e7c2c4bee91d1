//! Tree layout engine for JSON documents.
//!
//! Takes a parsed `serde_json::Value` and produces pre-positioned nodes and
//! edges for a top-down tree diagram. The client receives final coordinates
//! and just renders them.

pub mod error;
pub mod layout;
pub mod path;
pub mod types;

pub use error::LayoutError;
pub use layout::{subtree_width, LayoutConfig, TreeLayoutBuilder};
pub use path::{NodePath, PathSegment};
pub use types::{LayoutEdge, LayoutNode, NodeData, NodeStyle, Position, TreeGraph};
