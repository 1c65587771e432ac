// YAML document parser
// Turns raw editor text into an order-preserving document tree

use crate::parser::error::{ParseError, ParseResult};
use crate::parser::models::Value;

/// Parser for arbitrarily shaped YAML documents
pub struct DocumentParser;

impl DocumentParser {
    /// Parse a document from a YAML string
    ///
    /// A blank document parses to [`Value::Null`].
    pub fn parse(content: &str) -> ParseResult<Value> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ParseError::from_yaml_error(&e, content))?;

        Ok(Value::from(&yaml))
    }
}
