extern crate rand;

pub mod types;
pub mod error;
pub mod config;

pub mod graph_representation;
pub mod graph_algorithms;
pub mod utils;

pub mod all_pairs;

pub use error::{DistanceError, Result};
