//! Binary problem and result files.
//!
//! All values are little-endian with no padding:
//!
//! * problem: `i32` point count `n`, then `n` records of `f32` x and y
//! * result: `f32` total cost, then one record of three `i32` vertex indices per triangle

mod problem;
pub use problem::{read_points, read_problem, write_points, write_problem};
mod result;
pub use result::{read_result, read_triangulation, write_result, write_triangulation};

use std::io::{self, Read};

/// Read one fixed-size record, or `None` at a clean end of input.
///
/// A record cut short by the end of input is an [io::ErrorKind::UnexpectedEof] error.
fn read_record<R: Read, const N: usize>(reader: &mut R) -> io::Result<Option<[u8; N]>> {
    let mut buf = [0u8; N];
    let mut filled = 0;
    while filled < N {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    match filled {
        0 => Ok(None),
        _ if filled == N => Ok(Some(buf)),
        _ => Err(io::Error::new(io::ErrorKind::UnexpectedEof, format!("truncated record: {} of {} bytes", filled, N))),
    }
}

fn is_malformed(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData)
}
