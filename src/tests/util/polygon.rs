use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Point;

pub fn triangle() -> Vec<Point> {
    vec![
        (0.0, 0.0).into(),
        (4.0, 0.0).into(),
        (0.0, 3.0).into(),
    ]
}

/// The unit square, counterclockwise from the origin
pub fn square() -> Vec<Point> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]
}

pub fn regular(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
            let (y, x) = theta.sin_cos();
            [x * radius, y * radius]
        })
        .collect()
}

/// `n` points at random angles on a circle, in angular order, so the polygon is convex
pub fn random_convex(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut angles: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..std::f32::consts::TAU)).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles.into_iter()
        .map(|theta| Point::new(50. * theta.cos() + 7., 50. * theta.sin() - 3.))
        .collect()
}

pub fn all() -> Vec<Vec<Point>> {
    vec![triangle(), square(), random_convex(7, 1), random_convex(12, 2)]
}
