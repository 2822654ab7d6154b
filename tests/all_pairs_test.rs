use all_pairs_distances::all_pairs::all_pairs_algorithm::AllPairsAlgorithm;
use all_pairs_distances::all_pairs::dijkstra::DijkstraAllPairs;
use all_pairs_distances::all_pairs::floyd_warshall::ShortestPathEngine;
use all_pairs_distances::config::{DanglingNeighborPolicy, EngineConfig, ReportLayout};
use all_pairs_distances::error::DistanceError;
use all_pairs_distances::graph_representation::{Graph, GraphList, NodeCollection};
use all_pairs_distances::types::*;
use all_pairs_distances::utils::generator::random_graph;

//       ┌─┐
//  ┌────┤3├────┐
//  │    └┬┘    │
//  │     │1    │
//  │     │     │
// 1│    ┌┴┐    │1
//  │    │1│    │
//  │  4 ├─┤ 4  │
//  │ ┌──┘ └──┐ │
//  │ │       │ │
//  ├─┤       ├─┤
//  │0│       │2│
//  └─┘       └─┘
fn get_test_graph() -> (GraphList, Vec<Distance>) {
    let first_out = vec![0, 2, 5, 7, 10];
    let head = vec![1, 3, 0, 2, 3, 1, 3, 0, 1, 2];
    let weight = vec![4, 1, 4, 4, 1, 4, 1, 1, 1, 1];

    let expected_result = vec![0, 2, 2, 1, 2, 0, 2, 1, 2, 2, 0, 1, 1, 1, 1, 0];

    (GraphList::from_array(&first_out, &head, &weight).unwrap(), expected_result)
}

fn get_double_shortcut_graph() -> (GraphList, Vec<Distance>) {
    let first_out = vec![0, 2, 2, 4, 5, 6];
    let head = vec![2, 3, 1, 4, 2, 1];
    let weight = vec![10, 2, 10, 2, 2, 2];

    let expected_result = vec![
        0, 8, 4, 2, 6,
        INFINITY, 0, INFINITY, INFINITY, INFINITY,
        INFINITY, 4, 0, INFINITY, 2,
        INFINITY, 6, 2, 0, 4,
        INFINITY, 2, INFINITY, INFINITY, 0
    ];

    (GraphList::from_array(&first_out, &head, &weight).unwrap(), expected_result)
}

fn get_directed_detour_graph() -> (GraphList, Vec<Distance>) {
    let first_out = vec![0, 1, 1, 3, 4, 6, 7];
    let head = vec![4, 1, 3, 1, 2, 5, 2];
    let weight = vec![4, 8, 3, 3, 1, 2, 3];

    let expected_result = vec![
        0, 11, 5, 8, 4, 6,
        INFINITY, 0, INFINITY, INFINITY, INFINITY, INFINITY,
        INFINITY, 6, 0, 3, INFINITY, INFINITY,
        INFINITY, 3, INFINITY, 0, INFINITY, INFINITY,
        INFINITY, 7, 1, 4, 0, 2,
        INFINITY, 9, 3, 6, INFINITY, 0
    ];

    (GraphList::from_array(&first_out, &head, &weight).unwrap(), expected_result)
}

fn get_all_algorithms(config: EngineConfig) -> Vec<Box<dyn AllPairsAlgorithm>> {
    vec![
        Box::new(ShortestPathEngine::with_config(config.clone())),
        Box::new(DijkstraAllPairs::new(config)),
    ]
}

fn assert_distance_table(graph: &dyn Graph, expected_result: &[Distance]) {
    let num_nodes = graph.num_nodes();

    for mut algorithm in get_all_algorithms(EngineConfig::default()) {
        algorithm.calculate(graph).unwrap();

        let distance_table = algorithm.get_distance_table();
        println!("{:?}", distance_table.data());

        for source_index in 0..num_nodes {
            for target_index in 0..num_nodes {
                assert_eq!(
                    distance_table.get(target_index, source_index).unwrap(),
                    expected_result[source_index * num_nodes + target_index]
                );
            }
        }
    }
}

#[test]
fn test_weighted_graphs() {
    let (graph, expected_result) = get_test_graph();
    assert_distance_table(&graph, &expected_result);

    let (graph, expected_result) = get_double_shortcut_graph();
    assert_distance_table(&graph, &expected_result);

    let (graph, expected_result) = get_directed_detour_graph();
    assert_distance_table(&graph, &expected_result);
}

#[test]
fn test_path_graph() {
    let graph = NodeCollection::path(4);
    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    assert_eq!(engine.query(0, 1).unwrap(), Some(1));
    assert_eq!(engine.query(0, 2).unwrap(), Some(2));
    assert_eq!(engine.query(0, 3).unwrap(), Some(3));
    assert_eq!(engine.query(1, 3).unwrap(), Some(2));
    assert_eq!(engine.query(2, 3).unwrap(), Some(1));

    for node in 0..4 {
        assert_eq!(engine.query(node, node).unwrap(), Some(0));
    }

    // directed, there are no back edges
    assert_eq!(engine.query(3, 0).unwrap(), None);
    assert_eq!(engine.query(2, 1).unwrap(), None);
}

#[test]
fn test_single_isolated_node() {
    let mut graph = NodeCollection::new();
    graph.add_node(0);

    let mut engine = ShortestPathEngine::new();
    let distance_table = engine.compute_all_pairs(&graph).unwrap();

    assert_eq!(distance_table.width(), 1);
    assert_eq!(distance_table.height(), 1);
    assert_eq!(distance_table.get(0, 0).unwrap(), 0);
}

#[test]
fn test_disconnected_graph() {
    let graph = NodeCollection::from_adjacency(vec![(0, vec![]), (1, vec![]), (2, vec![])]);

    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    for source in 0..3 {
        for target in 0..3 {
            let expected = if source == target { Some(0) } else { None };
            assert_eq!(engine.query(source, target).unwrap(), expected);
        }
    }

    let distance_table = engine.get_distance_table();
    for y in 0..3 {
        for x in 0..3 {
            let expected = if x == y { 0 } else { INFINITY };
            assert_eq!(distance_table.get(x, y).unwrap(), expected);
        }
    }
}

#[test]
fn test_empty_graph() {
    let mut engine = ShortestPathEngine::new();
    let distance_table = engine.compute_all_pairs(&NodeCollection::new()).unwrap();

    assert!(distance_table.is_empty());
    assert_eq!(engine.report(ReportLayout::Full), "");
}

#[test]
fn test_arbitrary_node_ids() {
    let graph = NodeCollection::from_adjacency(vec![(30, vec![]), (10, vec![20]), (20, vec![30])]);

    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    // indices follow the ordered ids
    assert_eq!(engine.node_index().node_ids(), &[10, 20, 30]);
    assert_eq!(engine.query(10, 30).unwrap(), Some(2));
    assert_eq!(engine.query(30, 10).unwrap(), None);
    assert!(matches!(engine.query(10, 0), Err(DistanceError::InvalidNode(0))));
    assert!(matches!(engine.query(99, 10), Err(DistanceError::InvalidNode(99))));
}

#[test]
fn test_query_before_computation() {
    let engine = ShortestPathEngine::new();
    assert!(matches!(engine.query(0, 0), Err(DistanceError::InvalidNode(0))));
}

#[test]
fn test_self_loops_keep_the_diagonal_at_zero() {
    let mut graph = NodeCollection::path(3);
    graph.add_neighbor(1, 1);
    graph.add_edge(2, 2, 5);

    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    for node in 0..3 {
        assert_eq!(engine.query(node, node).unwrap(), Some(0));
    }
}

#[test]
fn test_direct_edge_without_detour_stays_one() {
    let graph = NodeCollection::from_adjacency(vec![(0, vec![1]), (1, vec![2]), (2, vec![])]);

    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    assert_eq!(engine.query(0, 1).unwrap(), Some(1));
    assert_eq!(engine.query(1, 2).unwrap(), Some(1));
}

#[test]
fn test_dangling_neighbors() {
    let graph = NodeCollection::from_adjacency(vec![(0, vec![1, 5]), (1, vec![])]);

    for mut algorithm in get_all_algorithms(EngineConfig::default()) {
        algorithm.calculate(&graph).unwrap();

        assert_eq!(algorithm.get_distance_table().width(), 2);
        assert_eq!(algorithm.distance(0, 1).unwrap(), Some(1));
        assert!(matches!(algorithm.distance(0, 5), Err(DistanceError::InvalidNode(5))));
    }

    let strict = EngineConfig::new().with_dangling(DanglingNeighborPolicy::Reject);
    for mut algorithm in get_all_algorithms(strict) {
        let result = algorithm.calculate(&graph);
        assert!(matches!(result, Err(DistanceError::DanglingNeighbor {node: 0, neighbor: 5})));
    }
}

#[test]
fn test_negative_weights_are_rejected() {
    let mut graph = GraphList::with_nodes(2);
    graph.add_edge(0, 1, -1);

    for mut algorithm in get_all_algorithms(EngineConfig::default()) {
        let result = algorithm.calculate(&graph);
        assert!(matches!(result, Err(DistanceError::NegativeWeight {node: 0, neighbor: 1, weight: -1})));
    }
}

#[test]
fn test_parallel_arcs_keep_the_smaller_weight() {
    let mut graph = GraphList::with_nodes(2);
    graph.add_edge(0, 1, 7);
    graph.add_edge(0, 1, 3);
    graph.add_edge(0, 1, 5);

    assert_eq!(graph.arcs(0), vec![(1, 3)]);
    assert_eq!(graph.num_arcs(), 1);

    for mut algorithm in get_all_algorithms(EngineConfig::default()) {
        algorithm.calculate(&graph).unwrap();
        assert_eq!(algorithm.distance(0, 1).unwrap(), Some(3));
    }
}

#[test]
fn test_adjacency_array_offsets_are_checked() {
    let targets = vec![1, 0];
    let weights = vec![2, 3];

    let graph = GraphList::from_array(&[0, 1, 2], &targets, &weights).unwrap();
    assert_eq!(graph.arcs(1), vec![(0, 3)]);

    assert!(matches!(
        GraphList::from_array(&[0, 2, 1], &targets, &weights),
        Err(DistanceError::InvalidAdjacency {node: 1, first_edge: 2, last_edge: 1, num_arcs: 2})
    ));
    assert!(matches!(
        GraphList::from_array(&[0, 1, 3], &targets, &weights),
        Err(DistanceError::InvalidAdjacency {node: 1, ..})
    ));
    assert!(matches!(
        GraphList::from_array(&[0, 2], &targets, &weights[..1]),
        Err(DistanceError::InvalidAdjacency {num_arcs: 1, ..})
    ));

    assert_eq!(GraphList::from_array(&[], &[], &[]).unwrap().num_nodes(), 0);
}

#[test]
fn test_large_weights_never_wrap_around() {
    let mut graph = GraphList::with_nodes(3);
    graph.add_edge(0, 1, INFINITY - 1);
    graph.add_edge(1, 2, INFINITY - 1);

    for mut algorithm in get_all_algorithms(EngineConfig::default()) {
        algorithm.calculate(&graph).unwrap();

        assert_eq!(algorithm.distance(0, 1).unwrap(), Some(INFINITY - 1));
        assert_eq!(algorithm.distance(0, 2).unwrap(), None);
    }
}

#[test]
fn test_deterministic_results() {
    let graph = random_graph(25, 0.15, 7).unwrap();

    let mut engine = ShortestPathEngine::new();
    let first_result = engine.compute_all_pairs(&graph).unwrap().clone();
    let second_result = engine.compute_all_pairs(&graph).unwrap().clone();

    assert_eq!(first_result, second_result);

    let mut other_engine = ShortestPathEngine::new();
    assert_eq!(other_engine.compute_all_pairs(&graph).unwrap(), &first_result);
}

#[test]
fn test_random_graph_probability_is_checked() {
    for edge_probability in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
        assert!(matches!(
            random_graph(4, edge_probability, 1),
            Err(DistanceError::InvalidProbability(_))
        ));
    }

    assert_eq!(random_graph(4, 0.0, 1).unwrap().num_arcs(), 0);
    assert_eq!(random_graph(4, 1.0, 1).unwrap().num_arcs(), 12);
}

#[test]
fn test_engine_reuse_resizes_the_table() {
    let mut engine = ShortestPathEngine::new();

    engine.compute_all_pairs(&NodeCollection::path(5)).unwrap();
    assert_eq!(engine.get_distance_table().width(), 5);

    engine.compute_all_pairs(&NodeCollection::path(2)).unwrap();
    assert_eq!(engine.get_distance_table().width(), 2);
    assert_eq!(engine.query(0, 1).unwrap(), Some(1));
    assert_eq!(engine.query(1, 0).unwrap(), None);
}

#[test]
fn test_take_distance_table() {
    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&NodeCollection::path(3)).unwrap();

    let distance_table = engine.take_distance_table();

    assert_eq!(distance_table.get(2, 0).unwrap(), 2);
    assert!(engine.get_distance_table().is_empty());
    assert_eq!(engine.into_distance_table().width(), 0);
}

#[test]
fn test_full_report() {
    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&NodeCollection::path(4)).unwrap();

    let expected = "0  -->\t0\t1\t2\t3\t\n\
                    1  -->\tinf\t0\t1\t2\t\n\
                    2  -->\tinf\tinf\t0\t1\t\n\
                    3  -->\tinf\tinf\tinf\t0\t\n";

    assert_eq!(engine.report(ReportLayout::Full), expected);
}

#[test]
fn test_upper_triangle_report() {
    let mut graph = NodeCollection::path(4);
    graph.make_symmetric();

    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    let expected = "0  -->\t0\t1\t2\t3\t\n\
                    1  -->\t\t0\t1\t2\t\n\
                    2  -->\t\t\t0\t1\t\n\
                    3  -->\t\t\t\t0\t\n";

    assert_eq!(engine.report(ReportLayout::UpperTriangle), expected);
    assert_eq!(engine.query(3, 0).unwrap(), Some(3));
}

#[test]
fn test_report_uses_node_ids() {
    let graph = NodeCollection::from_adjacency(vec![(5, vec![9]), (9, vec![])]);

    let mut engine = ShortestPathEngine::new();
    engine.compute_all_pairs(&graph).unwrap();

    assert_eq!(engine.report(ReportLayout::Full), "5  -->\t0\t1\t\n9  -->\tinf\t0\t\n");
}

#[test]
fn test_report_layout_from_str() {
    assert_eq!("full".parse::<ReportLayout>().unwrap(), ReportLayout::Full);
    assert_eq!("upper".parse::<ReportLayout>().unwrap(), ReportLayout::UpperTriangle);
    assert!("diagonal".parse::<ReportLayout>().is_err());
}
