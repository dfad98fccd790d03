use num_traits::Float;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::{distance, ChoiceTable, CostTable, DistanceMatrix, Options, SquareTable, TriangulationError, Vertex, VertexIdx};

/// A candidate split vertex together with the cost of splitting there.
///
/// Splits are totally ordered by cost and then by vertex, so [Split::min] is
/// associative and commutative and picks the smallest vertex among equal costs
/// no matter how a reduction is grouped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split<C> {
    pub cost: C,
    pub vertex: usize,
}

impl<C: Float> Split<C> {
    fn key(&self) -> (OrderedFloat<C>, usize) {
        (OrderedFloat(self.cost), self.vertex)
    }

    /// The better of two splits
    pub fn min(self, other: Self) -> Self {
        if other.key() < self.key() {
            other
        } else {
            self
        }
    }
}

/// The filled distance, cost and choice tables of one polygon
#[derive(Debug, Clone)]
pub struct Tables<C> {
    distances: DistanceMatrix<C>,
    costs: CostTable<C>,
    choices: ChoiceTable,
}

impl<C: Float + Send + Sync> Tables<C> {
    /// Compute all three tables for `points`.
    ///
    /// Chords are solved in order of increasing span. Chords of one span only
    /// read chords of smaller spans, so they are evaluated together (in
    /// parallel above [Options::parallel_threshold]) and written back before
    /// the next span starts.
    pub fn solve<V: Vertex<Coordinate = C> + Sync>(points: &[V], options: &Options) -> Result<Self, TriangulationError> {
        let n = points.len();
        let distances = distance::build(points, options)?;
        // Spans 0 and 1 keep these initial values: no cost, no split
        let mut costs = SquareTable::try_filled(n, C::zero())?;
        let mut choices = SquareTable::try_filled(n, None)?;

        let parallel = options.is_parallel(n);
        for span in 2..n {
            let chords = 0..(n - span);
            let splits: Vec<Split<C>> = if parallel {
                chords.into_par_iter().map(|i| best_split(&distances, &costs, i, i + span)).collect()
            } else {
                chords.map(|i| best_split(&distances, &costs, i, i + span)).collect()
            };
            log::trace!("span {}: {} chords", span, splits.len());

            for (i, split) in splits.into_iter().enumerate() {
                let j = i + span;
                costs.set_symmetric(i, j, split.cost);
                choices.set(i, j, Some(VertexIdx::new(split.vertex)));
            }
        }

        Ok(Self { distances, costs, choices })
    }

    pub fn distances(&self) -> &DistanceMatrix<C> {
        &self.distances
    }

    pub fn costs(&self) -> &CostTable<C> {
        &self.costs
    }

    pub fn choices(&self) -> &ChoiceTable {
        &self.choices
    }

    pub fn point_count(&self) -> usize {
        self.costs.size()
    }

    /// The cost of the outer chord `(0, n - 1)`, zero for fewer than two points
    pub fn total_cost(&self) -> C {
        match self.point_count() {
            0 | 1 => C::zero(),
            n => self.costs.get(0, n - 1),
        }
    }
}

/// Find the cheapest split vertex `k` of chord `(i, j)`, where `j > i + 1`.
fn best_split<C: Float>(distances: &DistanceMatrix<C>, costs: &CostTable<C>, i: usize, j: usize) -> Split<C> {
    debug_assert!(j > i + 1);
    let ji_dist = distances.get(j, i);
    let (cost_i, cost_j) = (costs.row(i), costs.row(j));
    let (dist_i, dist_j) = (distances.row(i), distances.row(j));

    ((i + 1)..j)
        .map(|k| Split {
            cost: cost_i[k] + cost_j[k] + dist_i[k] + dist_j[k] + ji_dist,
            vertex: k,
        })
        .reduce(Split::min)
        .unwrap_or(Split { cost: C::zero(), vertex: i + 1 })
}

#[cfg(test)]
mod tests {
    use super::Split;

    #[test]
    fn split_min_prefers_lower_cost() {
        let a = Split { cost: 2.0f32, vertex: 1 };
        let b = Split { cost: 1.0f32, vertex: 5 };
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }

    #[test]
    fn split_min_breaks_ties_by_vertex() {
        let a = Split { cost: 1.0f64, vertex: 3 };
        let b = Split { cost: 1.0f64, vertex: 2 };
        assert_eq!(a.min(b).vertex, 2);
        assert_eq!(b.min(a).vertex, 2);
    }

    #[test]
    fn split_min_is_associative() {
        let splits = [
            Split { cost: 3.0f32, vertex: 1 },
            Split { cost: 1.5, vertex: 2 },
            Split { cost: 1.5, vertex: 3 },
            Split { cost: 4.0, vertex: 4 },
        ];
        let left = splits.iter().copied().reduce(Split::min).unwrap();
        let right = splits.iter().rev().copied().reduce(Split::min).unwrap();
        let grouped = splits[0].min(splits[1]).min(splits[2].min(splits[3]));
        assert_eq!(left, right);
        assert_eq!(left, grouped);
        assert_eq!(left.vertex, 2);
    }
}
