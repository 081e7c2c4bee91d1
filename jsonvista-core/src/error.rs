//! Error types for the layout engine.

use thiserror::Error;

/// Errors produced while laying out a JSON document.
///
/// Layout is a total function over parsed JSON values; the only failure is the
/// nesting-depth guard that protects the recursive pass from stack exhaustion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("document nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },
}
