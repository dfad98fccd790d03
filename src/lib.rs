//! Minimum-cost triangulation of convex polygons.
//!
//! The cost of a triangulation is the summed side length of all its triangles.
//! It is found with the classic chord dynamic program: pairwise distances,
//! then a sweep over chords of increasing span recording the cheapest split
//! vertex of each chord, then a walk of those choices from the outer chord.
//!
//! ```
//! use convex_triangulate::triangulate;
//!
//! let square = [[0f32, 0.], [1., 0.], [1., 1.], [0., 1.]];
//! let triangulation = triangulate(&square).expect("Triangulation failed");
//! assert_eq!(triangulation.len(), 2);
//! ```

mod idx;
mod table;
mod math;
mod distance;
mod solver;
mod reconstruct;
mod options;
mod inputs;
mod outputs;
mod errors;

pub mod io;

#[cfg(feature = "svg")]
pub mod svg;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, TriangulationError};
pub use idx::VertexIdx;
pub use table::{ChoiceTable, CostTable, DistanceMatrix, SquareTable};
pub use solver::{Split, Tables};
pub use options::{Options, DEFAULT_PARALLEL_THRESHOLD};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::Float;

use std::time::Instant;

/// Triangulate a convex polygon with default [Options].
///
/// The points must be the polygon's vertices in cyclic order. Convexity is
/// not checked. Fewer than 3 points give an empty triangulation of cost zero.
pub fn triangulate<V: Vertex + Sync>(points: &[V]) -> Result<Triangulation<V::Coordinate>, TriangulationError> {
    triangulate_with(points, &Options::default())
}

/// Triangulate a convex polygon, scheduling the work as `options` describe.
///
/// With [Options::threads] set, the computation runs on a dedicated pool of
/// that many workers; the result is the same for any worker count.
pub fn triangulate_with<V: Vertex + Sync>(points: &[V], options: &Options) -> Result<Triangulation<V::Coordinate>, TriangulationError> {
    match options.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| do_triangulate(points, options))
        }
        None => do_triangulate(points, options),
    }
}

fn do_triangulate<V: Vertex + Sync>(points: &[V], options: &Options) -> Result<Triangulation<V::Coordinate>, TriangulationError> {
    let start = Instant::now();
    let tables = Tables::solve(points, options)?;
    log::debug!("Solved {} points: {:.3?}", points.len(), start.elapsed());

    let start = Instant::now();
    let triangles: Vec<Triangle> = tables.reconstruct_into(Vec::with_capacity(points.len().saturating_sub(2)))?;
    log::debug!("Reconstructed {} triangles: {:.3?}", triangles.len(), start.elapsed());

    Ok(Triangulation::new(triangles, tables.total_cost()))
}

impl<C: Float + Send + Sync> Tables<C> {
    /// Walk the choice table from the outer chord `(0, n - 1)`, appending its
    /// triangles to `list`.
    pub fn reconstruct_into<L: List<usize>>(&self, mut list: L) -> Result<L, TriangulationError> {
        let n = self.point_count();
        if n >= 3 {
            reconstruct::reconstruct(self.choices(), 0, n - 1, &mut list)?;
        }
        Ok(list)
    }

    /// Append the triangles below chord `(i, j)` to `list`
    pub fn reconstruct_chord<L: List<usize>>(&self, i: usize, j: usize, mut list: L) -> Result<L, TriangulationError> {
        reconstruct::reconstruct(self.choices(), i, j, &mut list)?;
        Ok(list)
    }
}
