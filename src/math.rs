use num_traits::Float;

use crate::Vertex;

/// Euclidean distance between two vertices.
///
/// Symmetric bit for bit: swapping the arguments only negates the differences before squaring.
#[inline]
pub(crate) fn distance<V: Vertex>(a: &V, b: &V) -> V::Coordinate {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}
