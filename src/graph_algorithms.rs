use tracing::trace;

use crate::error::{DistanceError, Result};
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::distance_queue::{DistanceQueue, QueueEntry};
use crate::utils::data_structures::{DistanceMatrix, NodeIndex};

/// relaxes the given square matrix in place until it holds all pairs shortest path distances
pub fn floyd_warshall(matrix: &mut DistanceMatrix) -> Result<()> {
    floyd_warshall_with_observer(matrix, |_, _| {})
}

/// same as `floyd_warshall` but calls `observer(k, matrix)` after relaxation pass k completed.
///
/// after pass k every cell (i, j) holds the shortest distance using only the intermediate
/// indices 0..=k, which is why k has to be the outermost loop.
/// row k and column k don't change during pass k since cell (k, k) is zero, so a copy of
/// row k can be used while the other rows are updated in place
pub fn floyd_warshall_with_observer<F>(matrix: &mut DistanceMatrix, mut observer: F) -> Result<()>
where
    F: FnMut(usize, &DistanceMatrix),
{
    if !matrix.is_square() {
        return Err(DistanceError::DimensionMismatch {
            width: matrix.width(),
            height: matrix.height(),
        });
    }

    let num_vertices = matrix.width();
    let mut pivot_row: Distances = vec![INFINITY; num_vertices];

    for k in 0..num_vertices {
        pivot_row.copy_from_slice(matrix.row(k)?);

        for i in 0..num_vertices {
            let row = matrix.row_mut(i)?;
            let i_to_k = row[k];

            // ignore INFINITY entries to avoid overflows
            if !is_finite(i_to_k) {
                continue;
            }

            for (current_distance, k_to_j) in row.iter_mut().zip(pivot_row.iter()) {
                if let Some(new_distance) = guarded_add(i_to_k, *k_to_j) {
                    if new_distance < *current_distance {
                        *current_distance = new_distance;
                    }
                }
            }
        }

        trace!(pass = k, "relaxation pass done");
        observer(k, matrix);
    }

    Ok(())
}

/// single pair search that doesn't need the dense matrix.
/// returns None if the goal is unreachable, arcs to unknown nodes are skipped
pub fn dijkstra(start: NodeId, goal: NodeId, graph: &impl Graph) -> Result<Option<Distance>> {
    let node_index = NodeIndex::new(graph.node_ids())?;
    let start_index = node_index.index_of(start)?;
    let goal_index = node_index.index_of(goal)?;

    let mut to_visit = DistanceQueue::new(node_index.len());
    to_visit.push_or_decrease(start_index, 0);

    let mut distance_table: Distances = vec![INFINITY; node_index.len()];
    distance_table[start_index] = 0;

    while let Some(QueueEntry {distance, node_index: current_index}) = to_visit.pop() {
        if current_index == goal_index {
            return Ok(Some(distance));
        }

        let current_node = node_index.node_ids()[current_index];

        for (target_node, weight) in graph.arcs(current_node) {
            if weight < 0 {
                return Err(DistanceError::NegativeWeight {
                    node: current_node,
                    neighbor: target_node,
                    weight,
                });
            }

            let target_index = match node_index.try_index_of(target_node) {
                Some(target_index) => target_index,
                None => continue,
            };

            if let Some(new_distance) = guarded_add(distance, weight) {
                if distance_table[target_index] > new_distance {
                    distance_table[target_index] = new_distance;

                    to_visit.push_or_decrease(target_index, new_distance);
                }
            }
        }
    }

    Ok(None)
}
