use crate::{reconstruct::reconstruct, ChoiceTable, Options, SquareTable, Tables, Triangle, TriangulationError, VertexIdx};

use super::util;

fn choice_table(n: usize, splits: &[(usize, usize, usize)]) -> ChoiceTable {
    let mut choices = SquareTable::try_filled(n, None).unwrap();
    for &(i, j, k) in splits {
        choices.set(i, j, Some(VertexIdx::new(k)));
    }
    choices
}

#[test]
fn pre_order() {
    // Fan from the outer chord: (0, 5) splits at 2, (0, 2) at 1, (2, 5) at 4, (2, 4) at 3
    let choices = choice_table(6, &[(0, 5, 2), (0, 2, 1), (2, 5, 4), (2, 4, 3)]);
    let mut triangles = Vec::<Triangle>::new();
    reconstruct(&choices, 0, 5, &mut triangles).expect("Reconstruction failed");
    assert_eq!(triangles, vec![
        Triangle::new(0, 5, 2),
        Triangle::new(0, 2, 1),
        Triangle::new(2, 5, 4),
        Triangle::new(2, 4, 3),
    ]);
}

#[test]
fn leaf_chord_emits_nothing() {
    let choices = choice_table(4, &[]);
    let mut triangles = Vec::<[usize; 3]>::new();
    reconstruct(&choices, 0, 3, &mut triangles).unwrap();
    assert!(triangles.is_empty());
}

#[test]
fn splits_lie_inside_their_chord() {
    for n in 3..40 {
        let polygon = util::polygon::random_convex(n, n as u64);
        let tables = Tables::solve(&polygon, &Options::default()).unwrap();
        let triangles: Vec<Triangle> = tables.reconstruct_into(Vec::new()).unwrap();
        assert_eq!(triangles.len(), n - 2);
        for t in triangles {
            assert!(t.chord_low < t.split && t.split < t.chord_high, "{} is not split inside its chord", t);
        }
    }
}

#[test]
fn sub_chord() {
    let tables = Tables::solve(&util::polygon::random_convex(10, 3), &Options::default()).unwrap();
    let triangles: Vec<[usize; 3]> = tables.reconstruct_chord(2, 7, Vec::new()).unwrap();
    assert_eq!(triangles.len(), 4);
    assert!(triangles.iter().flatten().all(|&v| (2..=7).contains(&v)));
    assert_eq!(&triangles[0][..2], &[2, 7]);
}

#[test]
fn split_outside_chord_is_rejected() {
    // (1, 4) claims to split at 4, which would never shrink the chord
    let choices = choice_table(5, &[(0, 4, 1), (1, 4, 4)]);
    let mut triangles = vec![Triangle::new(9, 9, 9)];
    match reconstruct(&choices, 0, 4, &mut triangles) {
        Err(TriangulationError::InternalError(_)) => {}
        other => panic!("Unexpected result {:?}", other.map(|_| ())),
    }

    let choices = choice_table(5, &[(1, 3, 4)]);
    assert!(reconstruct(&choices, 1, 3, &mut triangles).is_err());
    // Partial output is rolled back
    assert_eq!(triangles, vec![Triangle::new(9, 9, 9)]);
}

#[test]
fn chord_outside_table_is_rejected() {
    let choices = choice_table(3, &[]);
    let mut triangles = Vec::<Triangle>::new();
    assert!(reconstruct(&choices, 0, 3, &mut triangles).is_err());
}
