//! Plain text graph files.
//!
//! ```text
//! c comment
//! p sp <num_nodes> <num_arcs>   declares the nodes 0..num_nodes
//! n <id>                        declares a single node
//! a <source> <target> [weight]  arc, the weight defaults to 1
//! ```
//!
//! Arc sources are declared implicitly, arc targets are not. A target that is never
//! declared stays a dangling reference and is handled by the engine.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{DistanceError, Result};
use crate::graph_representation::{Graph, NodeCollection};
use crate::types::*;

/// largest node count a problem line may declare, the dense distance table of this many
/// nodes already takes 1 GiB
pub const MAX_DECLARED_NODES: NodeId = 1 << 14;

pub fn read_graph(path: &dyn AsRef<Path>) -> Result<NodeCollection> {
    let path: &Path = path.as_ref();
    let file = File::open(path)?;
    let graph = parse_graph(BufReader::new(file))?;

    debug!(path = %path.display(), num_nodes = graph.num_nodes(), num_arcs = graph.num_arcs(), "graph loaded");
    Ok(graph)
}

pub fn parse_graph<R: BufRead>(reader: R) -> Result<NodeCollection> {
    let mut graph = NodeCollection::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let split = line.split_whitespace().collect::<Vec<&str>>();

        match split.first().copied() {
            None | Some("c") => {},
            Some("p") => {
                if split.get(1) != Some(&"sp") {
                    return Err(parse_error(line_number, "expected problem line 'p sp <num_nodes> <num_arcs>'"));
                }

                let num_nodes: NodeId = parse_field(&split, 2, line_number, "number of nodes")?;

                if num_nodes > MAX_DECLARED_NODES {
                    return Err(parse_error(
                        line_number,
                        &format!("{} nodes exceed the limit of {}", num_nodes, MAX_DECLARED_NODES),
                    ));
                }

                for node in 0..num_nodes {
                    graph.add_node(node);
                }
            },
            Some("n") => {
                let node: NodeId = parse_field(&split, 1, line_number, "node id")?;
                graph.add_node(node);
            },
            Some("a") => {
                let source_node: NodeId = parse_field(&split, 1, line_number, "source node")?;
                let target_node: NodeId = parse_field(&split, 2, line_number, "target node")?;
                let arc_weight: Distance = match split.get(3) {
                    Some(_) => parse_field(&split, 3, line_number, "arc weight")?,
                    None => UNIT_WEIGHT,
                };

                if arc_weight < 0 {
                    return Err(parse_error(line_number, "arc weights must not be negative"));
                }

                graph.add_edge(source_node, target_node, arc_weight);
            },
            Some(other) => {
                return Err(parse_error(line_number, &format!("unknown line type '{}'", other)));
            },
        }
    }

    Ok(graph)
}

pub fn write_graph(path: &dyn AsRef<Path>, graph: &NodeCollection) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(&mut file, "c {} nodes, {} arcs", graph.num_nodes(), graph.num_arcs())?;

    for node in graph.node_ids() {
        writeln!(&mut file, "n {}", node)?;
    }

    for node in graph.node_ids() {
        for (neighbor, weight) in graph.arcs(node) {
            writeln!(&mut file, "a {} {} {}", node, neighbor, weight)?;
        }
    }

    file.flush()?;
    Ok(())
}

fn parse_field<T: FromStr>(split: &[&str], position: usize, line_number: usize, name: &str) -> Result<T> {
    let field = split
        .get(position)
        .ok_or_else(|| parse_error(line_number, &format!("missing {}", name)))?;

    field
        .parse()
        .map_err(|_| parse_error(line_number, &format!("invalid {} '{}'", name, field)))
}

fn parse_error(line: usize, message: &str) -> DistanceError {
    DistanceError::Parse {
        line,
        message: message.to_string(),
    }
}
