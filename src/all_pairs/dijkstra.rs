use tracing::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::distance_queue::{DistanceQueue, QueueEntry};
use crate::utils::data_structures::{DistanceMatrix, NodeIndex};

use super::all_pairs_algorithm::AllPairsAlgorithm;
use super::all_pairs_utils::collect_indexed_arcs;

/// runs one dijkstra search per source node. produces the same table as the dense engine
/// and is used to cross check it
pub struct DijkstraAllPairs {
    config: EngineConfig,
    node_index: NodeIndex,
    first_out: Vec<usize>,
    arclist: Vec<(usize, Distance)>,
    distance_table: DistanceMatrix
}

impl DijkstraAllPairs {

    pub fn new(config: EngineConfig) -> Self {
        DijkstraAllPairs {
            config,
            node_index: NodeIndex::default(),
            first_out: vec![0],
            arclist: Vec::new(),
            distance_table: DistanceMatrix::empty()
        }
    }

    fn calculate_distances(&mut self) -> Result<()> {
        let num_vertices = self.node_index.len();
        self.distance_table.resize(num_vertices, num_vertices, INFINITY)?;

        let mut queue = DistanceQueue::new(num_vertices);

        for source_index in 0..num_vertices {
            let distances = self.distance_table.row_mut(source_index)?;
            distances[source_index] = 0;
            queue.push_or_decrease(source_index, 0);

            while let Some(QueueEntry {distance: current_distance, node_index: current_index}) = queue.pop() {
                let start = self.first_out[current_index];
                let end = self.first_out[current_index + 1];

                for (target_index, edge_distance) in &self.arclist[start..end] {
                    if let Some(new_distance) = guarded_add(current_distance, *edge_distance) {
                        if distances[*target_index] > new_distance {
                            distances[*target_index] = new_distance;
                            queue.push_or_decrease(*target_index, new_distance);
                        }
                    }
                }
            }
        }

        debug!(num_vertices, "dijkstra searches done");
        Ok(())
    }
}

impl AllPairsAlgorithm for DijkstraAllPairs {

    fn initialize(&mut self, graph: &dyn Graph) -> Result<()> {
        let node_index = NodeIndex::new(graph.node_ids())?;
        let indexed_arcs = collect_indexed_arcs(graph, &node_index, self.config.dangling)?;

        // convert to adjacency array representation
        self.first_out.clear();
        self.arclist.clear();
        self.first_out.push(0);

        for arcs in indexed_arcs {
            self.arclist.extend(arcs);
            self.first_out.push(self.arclist.len());
        }

        self.node_index = node_index;
        Ok(())
    }

    fn compute_distances(&mut self) -> Result<()> {
        self.calculate_distances()
    }

    fn get_distance_table(&self) -> &DistanceMatrix {
        &self.distance_table
    }

    fn get_node_index(&self) -> &NodeIndex {
        &self.node_index
    }
}
