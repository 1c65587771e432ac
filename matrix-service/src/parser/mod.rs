// Parser module for matrix documents
// Provides YAML parsing into a document tree plus parse/schema error types

pub mod document;
pub mod error;
pub mod models;

pub use document::DocumentParser;
pub use error::{ParseError, ParseResult, SchemaError};
pub use models::Value;
