use std::time::{Duration, Instant};

pub mod distance_queue;
pub mod data_structures;
pub mod generator;
pub mod io;

/// runs the given function and returns the elapsed time together with its result
pub fn measure_time<R, F: FnOnce() -> R>(function: F) -> (Duration, R) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}
