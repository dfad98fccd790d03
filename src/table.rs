use std::ops;

use crate::{TriangulationError, VertexIdx};

/// An `n`×`n` table stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareTable<T> {
    n: usize,
    cells: Vec<T>,
}

/// Pairwise Euclidean distances between the input points
pub type DistanceMatrix<C> = SquareTable<C>;
/// Minimum triangulation cost of the sub-polygon below each chord
pub type CostTable<C> = SquareTable<C>;
/// The optimal split vertex of each chord, `None` for chords which bound no triangle
pub type ChoiceTable = SquareTable<Option<VertexIdx>>;

impl<T: Copy> SquareTable<T> {
    /// Allocate a table with every cell set to `value`.
    ///
    /// Fails with [TriangulationError::ResourceExhausted] instead of aborting
    /// when `n`×`n` cells cannot be allocated.
    pub(crate) fn try_filled(n: usize, value: T) -> Result<Self, TriangulationError> {
        let exhausted = || TriangulationError::ResourceExhausted { points: n };
        let len = n.checked_mul(n).ok_or_else(exhausted)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| exhausted())?;
        cells.resize(len, value);
        Ok(Self { n, cells })
    }

    /// The number of rows (and columns)
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.cells[i * self.n + j]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: T) {
        self.cells[i * self.n + j] = value;
    }

    #[inline(always)]
    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, value: T) {
        self.set(i, j, value);
        self.set(j, i, value);
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        // chunks_mut panics on a zero chunk size
        self.cells.chunks_mut(self.n.max(1))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Copy every cell above the diagonal to its mirror below the diagonal
    pub(crate) fn mirror_upper(&mut self) {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let value = self.get(i, j);
                self.set(j, i, value);
            }
        }
    }
}

impl<T: Copy> ops::Index<(usize, usize)> for SquareTable<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.n + j]
    }
}
