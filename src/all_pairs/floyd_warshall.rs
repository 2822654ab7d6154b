use tracing::{debug, trace};

use crate::config::{EngineConfig, ReportLayout};
use crate::error::Result;
use crate::graph_algorithms::floyd_warshall_with_observer;
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::data_structures::{DistanceMatrix, NodeIndex};

use super::all_pairs_algorithm::AllPairsAlgorithm;
use super::all_pairs_utils::{collect_indexed_arcs, render_report};

/// dense all pairs engine: loads the direct arcs of a graph into a distance matrix and
/// relaxes it in place with the Floyd-Warshall triple loop
#[derive(Debug, Default)]
pub struct ShortestPathEngine {
    config: EngineConfig,
    node_index: NodeIndex,
    distance_table: DistanceMatrix,
}

impl ShortestPathEngine {

    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        ShortestPathEngine {
            config,
            node_index: NodeIndex::default(),
            distance_table: DistanceMatrix::empty(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// runs the whole computation and returns the converged distance table
    pub fn compute_all_pairs(&mut self, graph: &dyn Graph) -> Result<&DistanceMatrix> {
        self.calculate(graph)?;

        Ok(&self.distance_table)
    }

    /// distance between two node ids of the last computation, None if unreachable
    pub fn query(&self, source: NodeId, target: NodeId) -> Result<Option<Distance>> {
        self.distance(source, target)
    }

    pub fn node_index(&self) -> &NodeIndex {
        &self.node_index
    }

    /// hands out the distance table, the engine keeps an empty one
    pub fn take_distance_table(&mut self) -> DistanceMatrix {
        self.distance_table.take()
    }

    pub fn into_distance_table(self) -> DistanceMatrix {
        self.distance_table
    }

    fn initialize_distances(&mut self, graph: &dyn Graph) -> Result<()> {
        let node_index = NodeIndex::new(graph.node_ids())?;
        let indexed_arcs = collect_indexed_arcs(graph, &node_index, self.config.dangling)?;
        let num_vertices = node_index.len();

        self.distance_table.resize(num_vertices, num_vertices, INFINITY)?;

        for (source_index, arcs) in indexed_arcs.iter().enumerate() {
            self.distance_table.set(source_index, source_index, 0)?;

            for (target_index, weight) in arcs {
                self.distance_table.reduce_value(*target_index, source_index, *weight)?;
            }
        }

        self.node_index = node_index;

        debug!(num_vertices, num_arcs = indexed_arcs.iter().map(Vec::len).sum::<usize>(), "distance table initialized");
        Ok(())
    }

    fn relax(&mut self) -> Result<()> {
        let trace_passes = self.config.trace_passes;
        let node_index = &self.node_index;

        if trace_passes {
            trace!("initial distances\n{}", render_report(node_index, &self.distance_table, ReportLayout::Full));
        }

        floyd_warshall_with_observer(&mut self.distance_table, |pass, matrix| {
            if trace_passes {
                trace!(pass, "distances\n{}", render_report(node_index, matrix, ReportLayout::Full));
            }
        })?;

        let unreachable = self.distance_table.data().iter().filter(|distance| !is_finite(**distance)).count();
        debug!(passes = self.node_index.len(), unreachable, "relaxation converged");

        Ok(())
    }
}

impl AllPairsAlgorithm for ShortestPathEngine {

    fn initialize(&mut self, graph: &dyn Graph) -> Result<()> {
        self.initialize_distances(graph)
    }

    fn compute_distances(&mut self) -> Result<()> {
        self.relax()
    }

    fn get_distance_table(&self) -> &DistanceMatrix {
        &self.distance_table
    }

    fn get_node_index(&self) -> &NodeIndex {
        &self.node_index
    }
}
