use std::fmt::Debug;

use num_traits::Float;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::Float], reexported as [crate::Float].
/// Distances and costs are computed in the same type.
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Float + Debug + Send + Sync;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

impl<C: Float + Debug + Send + Sync> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Float + Debug + Send + Sync> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}
