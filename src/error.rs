use std::fmt;

/// Custom error types for NMEA/GGA parsing
#[derive(Debug)]
pub enum GpsError {
    /// I/O errors
    Io(std::io::Error),
    /// UTF-8 parsing errors
    Utf8(std::str::Utf8Error),
    /// Parse errors with context
    Parse(String),
    /// Sentence does not carry the expected message tag
    InvalidSentence(String),
    /// Latitude/longitude hemisphere letter is not one of N/S/E/W
    InvalidDirection(char),
    /// Checksum did not match the sentence payload
    ChecksumMismatch,
    /// GPS module did not announce itself during startup
    Startup(String),
    /// GPS module rejected or ignored a configuration command
    ConfigRejected(String),
    /// Export format error
    Export(String),
    /// A blocking wait ran out of time
    Timeout,
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsError::Io(err) => write!(f, "I/O error: {}", err),
            GpsError::Utf8(err) => write!(f, "UTF-8 error: {}", err),
            GpsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            GpsError::InvalidSentence(msg) => write!(f, "Invalid sentence: {}", msg),
            GpsError::InvalidDirection(c) => write!(f, "Invalid direction letter: '{}'", c),
            GpsError::ChecksumMismatch => write!(f, "Checksum mismatch"),
            GpsError::Startup(msg) => write!(f, "GPS startup failed: {}", msg),
            GpsError::ConfigRejected(msg) => write!(f, "GPS config rejected: {}", msg),
            GpsError::Export(msg) => write!(f, "Export error: {}", msg),
            GpsError::Timeout => write!(f, "Timed out"),
        }
    }
}

impl std::error::Error for GpsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpsError::Io(err) => Some(err),
            GpsError::Utf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GpsError {
    fn from(err: std::io::Error) -> Self {
        GpsError::Io(err)
    }
}

impl From<std::str::Utf8Error> for GpsError {
    fn from(err: std::str::Utf8Error) -> Self {
        GpsError::Utf8(err)
    }
}

impl From<anyhow::Error> for GpsError {
    fn from(err: anyhow::Error) -> Self {
        GpsError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GpsError>;
