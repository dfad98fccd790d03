use num_traits::{Float, Zero};

use crate::Vertex;

fn distance<V: Vertex>(a: &V, b: &V) -> V::Coordinate {
    ((a.x() - b.x()).powi(2) + (a.y() - b.y()).powi(2)).sqrt()
}

/// The summed side lengths of `triangles`
pub fn perimeter_sum<V: Vertex>(points: &[V], triangles: &[[usize; 3]]) -> V::Coordinate {
    triangles.iter().fold(V::Coordinate::zero(), |sum, &[a, b, c]| {
        sum + distance(&points[a], &points[b]) + distance(&points[b], &points[c]) + distance(&points[c], &points[a])
    })
}

/// Every triangulation of the sub-polygon `i..=j`
fn enumerate(i: usize, j: usize) -> Vec<Vec<[usize; 3]>> {
    if j <= i + 1 {
        return vec![Vec::new()];
    }
    let mut all = Vec::new();
    for k in (i + 1)..j {
        for left in enumerate(i, k) {
            for right in enumerate(k, j) {
                let mut triangulation = vec![[i, j, k]];
                triangulation.extend_from_slice(&left);
                triangulation.extend_from_slice(&right);
                all.push(triangulation);
            }
        }
    }
    all
}

/// The cheapest triangulation found by listing every triangulation of the polygon
pub fn brute_force_cost<V: Vertex>(points: &[V]) -> V::Coordinate {
    if points.len() < 3 {
        return V::Coordinate::zero();
    }
    enumerate(0, points.len() - 1)
        .iter()
        .map(|triangles| perimeter_sum(points, triangles))
        .fold(V::Coordinate::infinity(), |a, b| a.min(b))
}
