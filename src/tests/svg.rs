use crate::{svg, triangulate, Triangle};

use super::util;

fn render_to_string(points: &[crate::Point], triangles: &[Triangle]) -> String {
    let mut bytes = Vec::new();
    svg::render(points, triangles, &mut bytes).expect("Rendering failed");
    String::from_utf8(bytes).unwrap()
}

fn elements(image: &str) -> usize {
    image.lines().filter(|line| line.starts_with('\t')).count()
}

#[test]
fn render_elements() {
    let polygon = util::polygon::random_convex(9, 4);
    let triangulation = triangulate(&polygon).unwrap();
    let image = render_to_string(&polygon, triangulation.triangles());

    assert!(image.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1600\""));
    assert!(image.trim_end().ends_with("</svg>"));
    // 7 triangles, then one element per polygon edge including the closing edge
    assert_eq!(elements(&image), 7 + 9);
    assert!(!image.contains("NaN"));
}

#[test]
fn render_is_deterministic() {
    let polygon = util::polygon::square();
    let triangulation = triangulate(&polygon).unwrap();
    assert_eq!(
        render_to_string(&polygon, triangulation.triangles()),
        render_to_string(&polygon, triangulation.triangles()),
    );
}

#[test]
fn square_height() {
    // A unit square scales to 1600 x 1600
    let image = render_to_string(&util::polygon::square(), &[]);
    assert!(image.contains("height=\"1600\""));
}

#[test]
fn missing_vertex() {
    let mut bytes = Vec::new();
    assert!(svg::render(&util::polygon::square(), &[Triangle::new(0, 1, 4)], &mut bytes).is_err());
}

#[test]
fn write_image_file() {
    let path = util::temp_path("square.svg");
    let polygon = util::polygon::square();
    let triangulation = triangulate(&polygon).unwrap();
    svg::write_image(&path, &polygon, triangulation.triangles()).unwrap();
    let image = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(elements(&image), 2 + 4);
}
