use smallvec::{SmallVec, smallvec};

use crate::{ChoiceTable, List, TriangulationError};

/// Emit the triangles below chord `(i, j)` into `list`, parent before children
/// and the `(i, k)` side before the `(k, j)` side.
///
/// Walks an explicit stack rather than recursing, so depth is not limited by
/// the call stack. On failure `list` is truncated back to its original length.
pub(crate) fn reconstruct<L: List<usize>>(choices: &ChoiceTable, i: usize, j: usize, list: &mut L) -> Result<(), TriangulationError> {
    let initial_len = list.len();
    let result = reconstruct_inner(choices, i, j, list);
    if result.is_err() {
        list.truncate(initial_len);
    }
    result
}

fn reconstruct_inner<L: List<usize>>(choices: &ChoiceTable, i: usize, j: usize, list: &mut L) -> Result<(), TriangulationError> {
    let n = choices.size();
    if i >= n || j >= n {
        return Err(TriangulationError::internal(format!("Chord ({}, {}) is outside a table of {} points", i, j, n)));
    }

    let mut pending: SmallVec<[(usize, usize); 16]> = smallvec![(i, j)];
    while let Some((i, j)) = pending.pop() {
        if let Some(k) = choices.get(i, j) {
            let k = k.usize();
            if !(i < k && k < j) {
                return Err(TriangulationError::internal(format!("Split v{} of chord ({}, {}) is not between its ends", k, i, j)));
            }
            list.push(i, j, k);
            // Last pushed is popped first
            pending.push((k, j));
            pending.push((i, k));
        }
    }
    Ok(())
}
