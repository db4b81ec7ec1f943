//! Error types for the takeoff library

use std::io;
use thiserror::Error;

/// Main error type for takeoff operations
#[derive(Debug, Error)]
pub enum TakeoffError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The drawing path does not carry the .dxf extension
    #[error("not a DXF file: {0}")]
    InvalidExtension(String),

    /// Error from the DXF parser; fatal, no partial results
    #[error("DXF parse error: {0}")]
    Parse(#[from] dxf::DxfError),

    /// A recognized entity carries an unusable attribute value
    /// (non-finite coordinate or angle, negative radius)
    #[error("malformed {entity_type} entity: {reason}")]
    MalformedEntity {
        /// DXF name of the offending entity type
        entity_type: &'static str,
        /// What made the entity unusable
        reason: String,
    },
}

/// Result type alias for takeoff operations
pub type Result<T> = std::result::Result<T, TakeoffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_extension_display() {
        let err = TakeoffError::InvalidExtension("plate.dwg".to_string());
        assert_eq!(err.to_string(), "not a DXF file: plate.dwg");
    }

    #[test]
    fn test_malformed_entity_display() {
        let err = TakeoffError::MalformedEntity {
            entity_type: "ARC",
            reason: "negative radius -2".to_string(),
        };
        assert_eq!(err.to_string(), "malformed ARC entity: negative radius -2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TakeoffError = io_err.into();
        assert!(matches!(err, TakeoffError::Io(_)));
    }
}
