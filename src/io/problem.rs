use std::{fs, io::{self, BufReader, BufWriter, Read, Write}, path::Path};

use num_traits::ToPrimitive;

use crate::{Point, TriangulationError, Vertex};

use super::{is_malformed, read_record};

/// Read a polygon in the binary problem layout
pub fn read_points<R: Read>(mut reader: R) -> io::Result<Vec<Point>> {
    let n = match read_record::<_, 4>(&mut reader)? {
        Some(bytes) => i32::from_le_bytes(bytes),
        None => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "missing point count")),
    };
    let n = usize::try_from(n)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, format!("negative point count {}", n)))?;

    // The count is untrusted, so do not let it size the allocation alone
    let mut points = Vec::with_capacity(n.min(1 << 16));
    for read in 0..n {
        let bytes = read_record::<_, 8>(&mut reader)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, format!("expected {} points, found {}", n, read))
        })?;
        let x = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let y = f32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Write a polygon in the binary problem layout, narrowing coordinates to `f32`
pub fn write_points<W: Write, V: Vertex>(mut writer: W, points: &[V]) -> io::Result<()> {
    let n = i32::try_from(points.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, format!("{} points do not fit the format", points.len())))?;
    writer.write_all(&n.to_le_bytes())?;
    for point in points {
        let x = point.x().to_f32().unwrap_or(f32::NAN);
        let y = point.y().to_f32().unwrap_or(f32::NAN);
        writer.write_all(&x.to_le_bytes())?;
        writer.write_all(&y.to_le_bytes())?;
    }
    writer.flush()
}

/// Load the polygon stored at `path`
pub fn read_problem<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, TriangulationError> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .map_err(|source| TriangulationError::InputUnavailable { path: path.to_owned(), source })?;

    let points = read_points(BufReader::new(file)).map_err(|source| {
        if is_malformed(&source) {
            TriangulationError::MalformedInput { path: path.to_owned(), message: source.to_string() }
        } else {
            TriangulationError::InputUnavailable { path: path.to_owned(), source }
        }
    })?;
    log::debug!("Read {} points from '{}'", points.len(), path.display());
    Ok(points)
}

/// Store a polygon at `path`, replacing any existing file
pub fn write_problem<P: AsRef<Path>, V: Vertex>(path: P, points: &[V]) -> Result<(), TriangulationError> {
    let path = path.as_ref();
    let unwritable = |source| TriangulationError::OutputUnwritable { path: path.to_owned(), source };
    let file = fs::File::create(path).map_err(unwritable)?;
    write_points(BufWriter::new(file), points).map_err(unwritable)
}
