use crate::config::ReportLayout;
use crate::error::Result;
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::data_structures::{DistanceMatrix, NodeIndex};

use super::all_pairs_utils::render_report;

/// an all pairs algorithm computes the shortest path distance between every ordered pair of nodes
pub trait AllPairsAlgorithm {

    /// assigns matrix indices to the nodes of the graph and loads its direct arcs
    fn initialize(&mut self, graph: &dyn Graph) -> Result<()>;

    /// computes all shortest path distances and stores them in the distance table
    fn compute_distances(&mut self) -> Result<()>;

    fn calculate(&mut self, graph: &dyn Graph) -> Result<()> {
        self.initialize(graph)?;
        self.compute_distances()
    }

    /// return the previously calculated distance table
    fn get_distance_table(&self) -> &DistanceMatrix;

    /// return the node id to matrix index mapping of the last initialization
    fn get_node_index(&self) -> &NodeIndex;

    /// distance between two node ids, None if the target is unreachable
    fn distance(&self, source: NodeId, target: NodeId) -> Result<Option<Distance>> {
        let node_index = self.get_node_index();
        let source_index = node_index.index_of(source)?;
        let target_index = node_index.index_of(target)?;

        let distance = self.get_distance_table().get(target_index, source_index)?;

        Ok(Some(distance).filter(|distance| is_finite(*distance)))
    }

    fn report(&self, layout: ReportLayout) -> String {
        render_report(self.get_node_index(), self.get_distance_table(), layout)
    }
}
