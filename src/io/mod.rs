//! Export of profiles and sketches to external formats.

#[cfg(feature = "svg-io")]
pub mod svg;

/// Errors raised while writing geometry to an external format.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// Nothing to write, e.g. an empty sketch.
    EmptyGeometry(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            EmptyGeometry(msg) => write!(f, "Nothing to export: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
