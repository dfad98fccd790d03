use std::{cmp, fmt, num::NonZeroUsize};

/// The position of a vertex within the input point sequence.
///
/// The index is stored offset by one, so `Option<VertexIdx>` is the same size
/// as `usize`. The [ChoiceTable](crate::ChoiceTable) uses `None` as its
/// "no split" marker.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexIdx(NonZeroUsize);

impl VertexIdx {
    pub fn new(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    pub fn usize(&self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Debug for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.usize(), f)
    }
}

impl fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.usize())
    }
}

impl From<VertexIdx> for usize {
    fn from(index: VertexIdx) -> Self {
        index.usize()
    }
}

impl cmp::PartialEq<usize> for VertexIdx {
    fn eq(&self, other: &usize) -> bool {
        &self.usize() == other
    }
}

impl cmp::PartialEq<VertexIdx> for usize {
    fn eq(&self, other: &VertexIdx) -> bool {
        self == &other.usize()
    }
}
