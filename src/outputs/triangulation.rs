use super::{List, Triangle};

/// The result of triangulating a convex polygon: its triangles in
/// reconstruction order and the total cost of the outer chord
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<C> {
    triangles: Vec<Triangle>,
    cost: C,
}

impl<C: Copy> Triangulation<C> {
    pub fn new(triangles: Vec<Triangle>, cost: C) -> Self {
        Self { triangles, cost }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append the triangles, in order, to any [List] of indices
    pub fn triangles_into<L: List<usize>>(&self, mut list: L) -> L {
        for triangle in &self.triangles {
            list.push(triangle.chord_low, triangle.chord_high, triangle.split);
        }
        list
    }

    pub fn into_parts(self) -> (Vec<Triangle>, C) {
        (self.triangles, self.cost)
    }
}
