use tracing::warn;

use crate::config::{DanglingNeighborPolicy, ReportLayout};
use crate::error::{DistanceError, Result};
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::data_structures::{DistanceMatrix, NodeIndex};

/// arcs of a single node with their targets translated to matrix indices
pub type IndexedArcs = Vec<(usize, Distance)>;

/// translates the arcs of every node to matrix indices, in node index order.
/// arcs to nodes outside of the graph are handled according to the given policy
pub fn collect_indexed_arcs(graph: &dyn Graph, node_index: &NodeIndex, dangling: DanglingNeighborPolicy) -> Result<Vec<IndexedArcs>> {
    let mut indexed_arcs = Vec::with_capacity(node_index.len());

    for node in node_index.node_ids() {
        let mut arcs = IndexedArcs::new();

        for (neighbor, weight) in graph.arcs(*node) {
            if weight < 0 {
                return Err(DistanceError::NegativeWeight {
                    node: *node,
                    neighbor,
                    weight,
                });
            }

            match (node_index.try_index_of(neighbor), dangling) {
                (Some(neighbor_index), _) => arcs.push((neighbor_index, weight)),
                (None, DanglingNeighborPolicy::Ignore) => {
                    warn!(node = *node, neighbor, "ignoring edge to unknown neighbor");
                },
                (None, DanglingNeighborPolicy::Reject) => {
                    return Err(DistanceError::DanglingNeighbor {
                        node: *node,
                        neighbor,
                    });
                },
            }
        }

        indexed_arcs.push(arcs);
    }

    Ok(indexed_arcs)
}

/// renders one line per source node: `<id>  -->` followed by tab separated distances.
/// the upper triangle layout indents every line so that the columns stay aligned
pub fn render_report(node_index: &NodeIndex, matrix: &DistanceMatrix, layout: ReportLayout) -> String {
    let mut report = String::new();
    let num_rows = node_index.len().min(matrix.height());

    for source_index in 0..num_rows {
        let first_target = match layout {
            ReportLayout::Full => 0,
            ReportLayout::UpperTriangle => source_index,
        };

        report.push_str(&node_index.node_ids()[source_index].to_string());
        report.push_str("  -->");
        report.push_str(&"\t".repeat(first_target + 1));

        for target_index in first_target..matrix.width() {
            let distance = matrix[(target_index, source_index)];

            if is_finite(distance) {
                report.push_str(&distance.to_string());
            }
            else {
                report.push_str("inf");
            }

            report.push('\t');
        }

        report.push('\n');
    }

    report
}
