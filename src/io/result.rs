use std::{fs, io::{self, BufReader, BufWriter, Read, Write}, path::Path};

use num_traits::Float;

use crate::{Triangle, Triangulation, TriangulationError};

use super::{is_malformed, read_record};

/// Write a triangulation in the binary result layout, narrowing the cost to `f32`
pub fn write_triangulation<W: Write, C: Float>(mut writer: W, triangulation: &Triangulation<C>) -> io::Result<()> {
    let cost = triangulation.cost().to_f32().unwrap_or(f32::NAN);
    writer.write_all(&cost.to_le_bytes())?;
    for triangle in triangulation.triangles() {
        for index in triangle.indices() {
            let index = i32::try_from(index)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, format!("vertex index {} does not fit the format", index)))?;
            writer.write_all(&index.to_le_bytes())?;
        }
    }
    writer.flush()
}

/// Read a triangulation in the binary result layout; triangles run to the end of input
pub fn read_triangulation<R: Read>(mut reader: R) -> io::Result<Triangulation<f32>> {
    let cost = match read_record::<_, 4>(&mut reader)? {
        Some(bytes) => f32::from_le_bytes(bytes),
        None => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "missing triangulation cost")),
    };

    let mut triangles = Vec::new();
    while let Some(bytes) = read_record::<_, 12>(&mut reader)? {
        let mut indices = [0usize; 3];
        for (index, chunk) in indices.iter_mut().zip(bytes.chunks_exact(4)) {
            let value = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            *index = usize::try_from(value)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, format!("negative vertex index {}", value)))?;
        }
        let [chord_low, chord_high, split] = indices;
        triangles.push(Triangle::new(chord_low, chord_high, split));
    }
    Ok(Triangulation::new(triangles, cost))
}

/// Store a triangulation at `path`, replacing any existing file
pub fn write_result<P: AsRef<Path>, C: Float>(path: P, triangulation: &Triangulation<C>) -> Result<(), TriangulationError> {
    let path = path.as_ref();
    let unwritable = |source| TriangulationError::OutputUnwritable { path: path.to_owned(), source };
    let file = fs::File::create(path).map_err(unwritable)?;
    write_triangulation(BufWriter::new(file), triangulation).map_err(unwritable)?;
    log::debug!("Wrote {} triangles to '{}'", triangulation.len(), path.display());
    Ok(())
}

/// Load the triangulation stored at `path`
pub fn read_result<P: AsRef<Path>>(path: P) -> Result<Triangulation<f32>, TriangulationError> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .map_err(|source| TriangulationError::InputUnavailable { path: path.to_owned(), source })?;

    read_triangulation(BufReader::new(file)).map_err(|source| {
        if is_malformed(&source) {
            TriangulationError::MalformedInput { path: path.to_owned(), message: source.to_string() }
        } else {
            TriangulationError::InputUnavailable { path: path.to_owned(), source }
        }
    })
}
