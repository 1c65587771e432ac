// Service error types
// Unifies parse, schema and I/O failures of the preview pipeline

use crate::parser::error::{ParseError, SchemaError};

use thiserror::Error;

/// Errors that end a preview run
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The input text is not valid YAML
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A located matrix block has the wrong shape
    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_passes_through_display() {
        let err: ServiceError = SchemaError::new("expected a string", "matrix.os[0]").into();
        assert_eq!(err.to_string(), "schema error at 'matrix.os[0]': expected a string");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yml");
        let err: ServiceError = io.into();
        assert!(matches!(err, ServiceError::Io(_)));
        assert!(err.to_string().contains("missing.yml"));
    }
}
