use std::fmt;

/// A triangle of the triangulation, as indices into the input points.
///
/// `chord_low` and `chord_high` are the ends of the chord the triangle was
/// split from, and `split` is the vertex chosen between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub chord_low: usize,
    pub chord_high: usize,
    pub split: usize,
}

impl Triangle {
    pub fn new(chord_low: usize, chord_high: usize, split: usize) -> Self {
        Self { chord_low, chord_high, split }
    }

    /// The three vertex indices in output order
    pub fn indices(&self) -> [usize; 3] {
        [self.chord_low, self.chord_high, self.split]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(v{}, v{}, v{})", self.chord_low, self.chord_high, self.split)
    }
}

impl From<(usize, usize, usize)> for Triangle {
    fn from((chord_low, chord_high, split): (usize, usize, usize)) -> Self {
        Self::new(chord_low, chord_high, split)
    }
}

impl From<Triangle> for [usize; 3] {
    fn from(triangle: Triangle) -> Self {
        triangle.indices()
    }
}
