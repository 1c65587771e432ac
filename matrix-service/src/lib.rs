// Matrix Service Library
// Core engine for previewing CI build matrix expansion

pub mod error;
pub mod matrix;
pub mod parser;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};

// Re-export parser types
pub use parser::{DocumentParser, ParseError, ParseResult, SchemaError, Value};

// Re-export matrix types
pub use matrix::{
    Action, ActionDetail, ActionKind, CanonicalMatrix, Combination, Directive, DocumentScanner,
    Entries, Expansion, IdentityAssigner, MatrixExpander, MatrixOccurrence, MatrixPreview,
    MatrixReporter, MatrixResult, MatrixValidator, PreviewOutcome, PreviewSession, PreviewState,
    ReportFormat,
};
