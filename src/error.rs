//! Error type shared by the matrix, the engine and graph file handling.

use thiserror::Error;

use crate::types::{Distance, NodeId};

#[derive(Debug, Error)]
pub enum DistanceError {
    /// The requested matrix size overflows or cannot be reserved.
    #[error("unable to allocate a {width}x{height} distance matrix")]
    Allocation { width: usize, height: usize },

    /// Cell access outside of the matrix bounds.
    #[error("cell ({x}, {y}) is outside of a {width}x{height} distance matrix")]
    Index {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Relaxation requires a square matrix.
    #[error("relaxation requires a square matrix, got {width}x{height}")]
    DimensionMismatch { width: usize, height: usize },

    /// Node id absent from the index mapping.
    #[error("unknown node id: {0}")]
    InvalidNode(NodeId),

    /// The same node id was listed twice while assigning matrix indices.
    #[error("node id {0} appears more than once")]
    DuplicateNode(NodeId),

    /// A node lists a neighbor that is not part of the graph.
    #[error("node {node} references unknown neighbor {neighbor}")]
    DanglingNeighbor { node: NodeId, neighbor: NodeId },

    /// Edge weights must be non-negative.
    #[error("edge {node} -> {neighbor} has negative weight {weight}")]
    NegativeWeight {
        node: NodeId,
        neighbor: NodeId,
        weight: Distance,
    },

    /// Random graphs need an edge probability in 0.0..=1.0.
    #[error("edge probability {0} is not within 0.0..=1.0")]
    InvalidProbability(f64),

    /// Offsets of an adjacency array that are decreasing or point past the arc arrays.
    #[error("arcs {first_edge}..{last_edge} of node {node} are not within the {num_arcs} given arcs")]
    InvalidAdjacency {
        node: usize,
        first_edge: usize,
        last_edge: usize,
        num_arcs: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, DistanceError>;
