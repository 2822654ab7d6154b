use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DistanceError, Result};
use crate::types::*;

/// a directed graph as consumed by the all pairs algorithms.
/// `node_ids` defines the iteration order used to assign matrix indices
pub trait Graph {

    /// adds an arc, for parallel arcs the smaller weight wins
    fn add_edge(&mut self, start: NodeId, end: NodeId, weight: Distance);
    fn num_nodes(&self) -> usize;
    fn node_ids(&self) -> NodeIds;
    fn contains(&self, node: NodeId) -> bool;

    /// outgoing arcs of the given node as (target, weight) pairs, empty for unknown nodes.
    /// targets are not guaranteed to be part of the graph
    fn arcs(&self, node: NodeId) -> Arclist;

    fn num_arcs(&self) -> usize {
        self.node_ids().into_iter().map(|node| self.arcs(node).len()).sum()
    }
}

/// nodes with arbitrary ids, ordered by id, each with an ordered set of neighbors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeCollection {
    nodes: BTreeMap<NodeId, BTreeMap<NodeId, Distance>>,
}

impl NodeCollection {

    pub fn new() -> Self {
        NodeCollection {
            nodes: BTreeMap::new(),
        }
    }

    /// creates a collection from (node, neighbors) pairs with unit weights.
    /// neighbors are not added as nodes on their own
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, N)>,
        N: IntoIterator<Item = NodeId>,
    {
        let mut collection = NodeCollection::new();

        for (node, neighbors) in adjacency {
            collection.add_node(node);

            for neighbor in neighbors {
                collection.add_neighbor(node, neighbor);
            }
        }

        collection
    }

    /// path graph 0 -> 1 -> ... -> num_nodes - 1
    pub fn path(num_nodes: u32) -> Self {
        NodeCollection::from_adjacency((0..num_nodes).map(|node| {
            let next = if node + 1 < num_nodes { Some(node + 1) } else { None };
            (node, next)
        }))
    }

    /// returns false if the node was already present
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }

        self.nodes.insert(node, BTreeMap::new());
        true
    }

    /// adds a unit weight edge, the source node is created if missing, the target never is
    pub fn add_neighbor(&mut self, node: NodeId, neighbor: NodeId) {
        self.add_edge(node, neighbor, UNIT_WEIGHT);
    }

    pub fn neighbors(&self, node: NodeId) -> NodeIds {
        self.nodes
            .get(&node)
            .map(|neighbors| neighbors.keys().copied().collect())
            .unwrap_or_default()
    }

    /// adds the reverse of every arc whose target is part of the collection
    pub fn make_symmetric(&mut self) {
        let mut reverse_arcs = Vec::new();

        for (node, neighbors) in &self.nodes {
            for (neighbor, weight) in neighbors {
                if self.nodes.contains_key(neighbor) {
                    reverse_arcs.push((*neighbor, *node, *weight));
                }
            }
        }

        for (start, end, weight) in reverse_arcs {
            self.add_edge(start, end, weight);
        }
    }
}

impl Graph for NodeCollection {

    fn add_edge(&mut self, start: NodeId, end: NodeId, weight: Distance) {
        let neighbors = self.nodes.entry(start).or_default();
        let current_weight = neighbors.entry(end).or_insert(weight);

        if weight < *current_weight {
            *current_weight = weight;
        }
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> NodeIds {
        self.nodes.keys().copied().collect()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn arcs(&self, node: NodeId) -> Arclist {
        self.nodes
            .get(&node)
            .map(|neighbors| neighbors.iter().map(|(neighbor, weight)| (*neighbor, *weight)).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for NodeCollection {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in &self.nodes {
            for (neighbor, weight) in neighbors {
                writeln!(f, "edge from {} to {} with weight: {}", node, neighbor, weight)?;
            }
        }

        Ok(())
    }
}

/// dense node ids 0..n with per arc weights
#[derive(Clone, Debug, Default)]
pub struct GraphList {
    edges: Vec<NodeIds>,
    weights: Vec<Distances>,
}

impl GraphList {

    pub fn with_nodes(num_nodes: usize) -> GraphList {
        GraphList {
            edges: vec![Vec::new(); num_nodes],
            weights: vec![Vec::new(); num_nodes],
        }
    }

    /// converts an adjacency array (first edge offsets, targets, weights) into a list.
    /// fails if the offsets of a node decrease or point past the target or weight arrays
    pub fn from_array(first_edge: &[u32], target_node: &[NodeId], weights: &[Distance]) -> Result<GraphList> {
        let num_arcs = target_node.len().min(weights.len());
        let mut list = GraphList::with_nodes(first_edge.len().saturating_sub(1));

        for (node, offsets) in first_edge.windows(2).enumerate() {
            let (first, last) = (offsets[0] as usize, offsets[1] as usize);

            if last < first || num_arcs < last {
                return Err(DistanceError::InvalidAdjacency {
                    node,
                    first_edge: first,
                    last_edge: last,
                    num_arcs,
                });
            }

            for (target, weight) in target_node[first..last].iter().zip(&weights[first..last]) {
                list.add_edge(node as NodeId, *target, *weight);
            }
        }

        Ok(list)
    }
}

impl Graph for GraphList {

    fn add_edge(&mut self, start: NodeId, end: NodeId, weight: Distance) {
        let start = start as usize;

        if start >= self.edges.len() {
            self.edges.resize(start + 1, Vec::new());
            self.weights.resize(start + 1, Vec::new());
        }

        match self.edges[start].iter().position(|target| *target == end) {
            Some(position) => {
                let current_weight = &mut self.weights[start][position];
                *current_weight = (*current_weight).min(weight);
            },
            None => {
                self.edges[start].push(end);
                self.weights[start].push(weight);
            },
        }
    }

    fn num_nodes(&self) -> usize {
        self.edges.len()
    }

    fn node_ids(&self) -> NodeIds {
        (0..self.edges.len() as NodeId).collect()
    }

    fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.edges.len()
    }

    fn arcs(&self, node: NodeId) -> Arclist {
        match (self.edges.get(node as usize), self.weights.get(node as usize)) {
            (Some(targets), Some(weights)) => targets.iter().copied().zip(weights.iter().copied()).collect(),
            _ => Vec::new(),
        }
    }
}
