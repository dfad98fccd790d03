//! SVG rendering of a triangulated polygon.
//!
//! The image is 1600 units wide and scaled to keep the polygon's aspect
//! ratio. Each triangle is filled with a colour drawn from a fixed palette by
//! a seeded generator, so the same triangulation always renders the same way.

use std::{fs, io::{self, BufWriter, Write}, path::Path};

use num_traits::ToPrimitive;
use rand::{rngs::StdRng, Rng, SeedableRng};
use svg_fmt::{black, line_segment, polygon, rgb, Color, Fill, Stroke};

use crate::{Triangle, TriangulationError, Vertex};

const IMAGE_WIDTH: f32 = 1600.0;
const COLOR_SEED: u64 = 0x5eed;

const PALETTE: [(u8, u8, u8); 10] = [
    (255, 165, 0),   // orange
    (165, 42, 42),   // brown
    (128, 0, 128),   // purple
    (0, 0, 255),     // blue
    (233, 150, 122), // darksalmon
    (255, 255, 0),   // yellow
    (0, 128, 0),     // green
    (255, 0, 0),     // red
    (0, 255, 0),     // lime
    (0, 255, 255),   // aqua
];

fn pick_color<R: Rng>(rng: &mut R) -> Color {
    let (r, g, b) = PALETTE[rng.gen_range(0..PALETTE.len())];
    rgb(r, g, b)
}

/// Maps polygon coordinates onto the image
struct Frame {
    x_min: f32,
    y_min: f32,
    scale: f32,
    height: f32,
}

impl Frame {
    fn new(points: &[[f32; 2]]) -> Self {
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (f32::MAX, f32::MIN, f32::MAX, f32::MIN);
        for &[x, y] in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if points.is_empty() {
            return Self { x_min: 0.0, y_min: 0.0, scale: 1.0, height: 0.0 };
        }

        let width = x_max - x_min;
        let scale = if width > 0.0 && width.is_finite() { IMAGE_WIDTH / width } else { 1.0 };
        let height = (scale * (y_max - y_min)).ceil();
        Self { x_min, y_min, scale, height }
    }

    fn map(&self, [x, y]: [f32; 2]) -> [f32; 2] {
        [self.scale * (x - self.x_min), self.scale * (y - self.y_min)]
    }
}

/// Write the polygon outline and its triangles as an SVG document
pub fn render<V: Vertex, W: Write>(points: &[V], triangles: &[Triangle], mut w: W) -> io::Result<()> {
    let coords: Vec<[f32; 2]> = points.iter()
        .map(|v| [v.x().to_f32().unwrap_or(0.0), v.y().to_f32().unwrap_or(0.0)])
        .collect();
    let frame = Frame::new(&coords);
    let mut rng = StdRng::seed_from_u64(COLOR_SEED);

    writeln!(w, "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">", IMAGE_WIDTH, frame.height)?;

    for triangle in triangles {
        let mut corners = [[0.0; 2]; 3];
        for (corner, index) in corners.iter_mut().zip(triangle.indices()) {
            let v = coords.get(index).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("triangle {} refers to a missing vertex", triangle))
            })?;
            *corner = frame.map(*v);
        }
        let color = pick_color(&mut rng);
        writeln!(w, "\t{}",
            polygon(&corners[..])
                .fill(Fill::Color(color))
                .stroke(Stroke::Color(black(), 0.3))
        )?;
    }

    for (i, &from) in coords.iter().enumerate() {
        let [x1, y1] = frame.map(from);
        let [x2, y2] = frame.map(coords[(i + 1) % coords.len()]);
        writeln!(w, "\t{}",
            line_segment(x1, y1, x2, y2)
                .color(black())
                .width(2.0)
        )?;
    }

    writeln!(w, "</svg>")?;
    w.flush()
}

/// Render to the file at `path`, replacing any existing file
pub fn write_image<P: AsRef<Path>, V: Vertex>(path: P, points: &[V], triangles: &[Triangle]) -> Result<(), TriangulationError> {
    let path = path.as_ref();
    let failed = |source| TriangulationError::SvgOutput { path: path.to_owned(), source };
    let file = fs::File::create(path).map_err(failed)?;
    render(points, triangles, BufWriter::new(file)).map_err(failed)?;
    log::debug!("Wrote image '{}'", path.display());
    Ok(())
}
