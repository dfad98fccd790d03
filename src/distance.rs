use num_traits::Zero;
use rayon::prelude::*;

use crate::{math, DistanceMatrix, Options, SquareTable, TriangulationError, Vertex};

/// Build the symmetric matrix of pairwise distances.
///
/// Each row computes only its cells above the diagonal; the lower triangle is
/// mirrored once every row is done.
pub(crate) fn build<V: Vertex + Sync>(points: &[V], options: &Options) -> Result<DistanceMatrix<V::Coordinate>, TriangulationError> {
    let n = points.len();
    let mut distances = SquareTable::try_filled(n, <V::Coordinate as Zero>::zero())?;

    let fill_row = |(i, row): (usize, &mut [V::Coordinate])| {
        let pi = &points[i];
        for (j, cell) in row.iter_mut().enumerate().skip(i + 1) {
            *cell = math::distance(pi, &points[j]);
        }
    };

    if options.is_parallel(n) {
        distances.cells_mut().par_chunks_mut(n.max(1)).enumerate().for_each(fill_row);
    } else {
        distances.rows_mut().enumerate().for_each(fill_row);
    }
    distances.mirror_upper();

    Ok(distances)
}
