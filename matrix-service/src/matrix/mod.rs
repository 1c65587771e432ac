// Matrix Engine Module
// Discovery, validation, expansion and reporting of build matrices

pub mod expander;
pub mod identity;
pub mod models;
pub mod preview;
pub mod report;
pub mod scanner;
pub mod schema;

// Re-export key types
pub use expander::MatrixExpander;
pub use identity::IdentityAssigner;
pub use models::{
    Action, ActionDetail, ActionKind, CanonicalMatrix, Combination, Directive, Entries, Expansion,
    MatrixResult,
};
pub use preview::{MatrixPreview, PreviewOutcome, PreviewSession, PreviewState};
pub use report::{MatrixReporter, ReportFormat};
pub use scanner::{DocumentScanner, MatrixOccurrence};
pub use schema::MatrixValidator;
