//! Error types for reading graphs and querying graph handles.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while constructing a graph or querying a [`GraphHandle`](crate::handle::GraphHandle).
///
/// The analysis algorithms themselves never fail on a valid graph; all variants describe
/// either defective input or an invalid handle.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input contained no line that could serve as graph name.
    #[error("Graph name not found: input is empty or contains only comments")]
    MissingName,

    /// A line is neither a vertex nor an edge declaration.
    #[error("Syntax error in line {line}: `{content}`")]
    Syntax { line: usize, content: String },

    /// The weight token of an edge declaration is not an integer.
    #[error("Invalid weight `{token}` in line {line}")]
    InvalidWeight { line: usize, token: String },

    /// Distances are only defined for non-negative weights.
    #[error("Negative weight {weight} in line {line}")]
    NegativeWeight { line: usize, weight: i64 },

    /// The graph behind a handle was already released.
    #[error("Graph handle was already released")]
    Released,
}
