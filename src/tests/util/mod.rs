pub mod polygon;
mod brute_force;

use std::{env, path, process};

pub use brute_force::{brute_force_cost, perimeter_sum};

/// A path in the system temp directory unique to this test process
pub fn temp_path(name: &str) -> path::PathBuf {
    env::temp_dir().join(format!("convex-triangulate-{}-{}", process::id(), name))
}
