pub mod all_pairs_algorithm;
pub mod all_pairs_utils;

pub mod floyd_warshall;
pub mod dijkstra;
