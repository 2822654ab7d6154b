use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DistanceError, Result};
use crate::graph_representation::{Graph, NodeCollection};
use crate::types::*;

/// creates a graph with the nodes 0..num_nodes where every ordered pair of distinct nodes
/// is connected with the given probability. the same seed always yields the same graph
pub fn random_graph(num_nodes: u32, edge_probability: f64, seed: u64) -> Result<NodeCollection> {
    random_weighted_graph(num_nodes, edge_probability, UNIT_WEIGHT, seed)
}

/// like `random_graph` but every arc gets a weight in 1..=max_weight.
/// fails for probabilities outside of 0.0..=1.0, NaN included
pub fn random_weighted_graph(num_nodes: u32, edge_probability: f64, max_weight: Distance, seed: u64) -> Result<NodeCollection> {
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(DistanceError::InvalidProbability(edge_probability));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.max(UNIT_WEIGHT);

    let mut graph = NodeCollection::new();

    for node in 0..num_nodes {
        graph.add_node(node);
    }

    for start in 0..num_nodes {
        for end in 0..num_nodes {
            if start != end && rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(UNIT_WEIGHT..=max_weight);
                graph.add_edge(start, end, weight);
            }
        }
    }

    Ok(graph)
}
