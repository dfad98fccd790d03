use std::{error, fmt, io, path};

use backtrace::Backtrace;

/// A precondition of the choice table was violated, or a reconstruction bug was encountered.
#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred while loading, triangulating or saving a polygon
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The problem file could not be opened or read
    InputUnavailable { path: path::PathBuf, source: io::Error },
    /// The problem (or result) file does not follow the binary layout
    MalformedInput { path: path::PathBuf, message: String },
    /// The result file could not be created or written
    OutputUnwritable { path: path::PathBuf, source: io::Error },
    /// The `n`×`n` tables for this many points could not be allocated
    ResourceExhausted { points: usize },
    /// A dedicated worker pool could not be started
    ThreadPool(rayon::ThreadPoolBuildError),
    /// The SVG image could not be written
    SvgOutput { path: path::PathBuf, source: io::Error },
    /// A reconstruction precondition was violated, or a bug was encountered.
    InternalError(InternalError),
}

impl TriangulationError {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl From<rayon::ThreadPoolBuildError> for TriangulationError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(e)
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputUnavailable { path, source } => write!(f, "Cannot open the input file '{}' to read the problem: {}", path.display(), source),
            Self::MalformedInput { path, message } => write!(f, "Malformed file '{}': {}", path.display(), message),
            Self::OutputUnwritable { path, source } => write!(f, "Cannot write the results to '{}': {}", path.display(), source),
            Self::ResourceExhausted { points } => write!(f, "Not enough memory to triangulate {} points", points),
            Self::ThreadPool(error) => fmt::Display::fmt(error, f),
            Self::SvgOutput { path, source } => write!(f, "Cannot write the svg file '{}': {}", path.display(), source),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InputUnavailable { source, .. } => Some(source),
            Self::OutputUnwritable { source, .. } => Some(source),
            Self::SvgOutput { source, .. } => Some(source),
            Self::ThreadPool(error) => Some(error),
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}
