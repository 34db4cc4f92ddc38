//! Analyzer error types

use std::fmt;

/// Errors raised by the analyzer and its signal sources
#[derive(Debug)]
pub enum AnalyzerError {
    /// A parameter was out of range or not a number
    InvalidArgument(String),
    /// The analyzer was disposed; no further operations are possible
    Disposed,
    /// IO error while reading a sample file
    Io(std::io::Error),
    /// Sample file could not be decoded
    Decode(String),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            AnalyzerError::Disposed => write!(f, "Analyzer has been disposed"),
            AnalyzerError::Io(err) => write!(f, "IO error: {}", err),
            AnalyzerError::Decode(msg) => write!(f, "Failed to decode sample: {}", msg),
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::Io(err)
    }
}

impl From<hound::Error> for AnalyzerError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io) => AnalyzerError::Io(io),
            other => AnalyzerError::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalyzerError::InvalidArgument("smoothing must be between 0.0 and 1.0".into());
        assert!(err.to_string().contains("smoothing"));

        assert_eq!(
            AnalyzerError::Disposed.to_string(),
            "Analyzer has been disposed"
        );
    }

    #[test]
    fn test_hound_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AnalyzerError = hound::Error::IoError(io).into();
        assert!(matches!(err, AnalyzerError::Io(_)));
    }
}
