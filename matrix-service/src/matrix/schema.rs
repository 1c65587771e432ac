// Schema Validator
// Canonicalizes a raw matrix block into entries plus include/exclude directives

use crate::matrix::models::{CanonicalMatrix, Directive};
use crate::parser::error::SchemaError;
use crate::parser::models::Value;

pub const INCLUDE_KEY: &str = "include";
pub const EXCLUDE_KEY: &str = "exclude";

/// Validator for raw matrix values
pub struct MatrixValidator;

impl MatrixValidator {
    /// Validate `value` (found at `path`) and return its canonical form.
    ///
    /// `include` and `exclude` are taken out first; every remaining key is a
    /// dimension and must hold a list of strings.
    pub fn canonicalize(value: &Value, path: &str) -> Result<CanonicalMatrix, SchemaError> {
        let Some(fields) = value.as_object() else {
            return Err(SchemaError::new(
                "matrix must be a mapping of dimension names to value lists",
                path,
            )
            .with_found(value.type_name())
            .with_suggestion("write it as `os: [linux, windows]` with optional include/exclude lists"));
        };

        let (directives, dimensions): (Vec<_>, Vec<_>) = fields
            .iter()
            .partition(|(key, _)| key == INCLUDE_KEY || key == EXCLUDE_KEY);

        let mut matrix = CanonicalMatrix::default();

        for (key, value) in directives {
            let list = Self::directive_list(value, &child_path(path, key))?;
            if key == INCLUDE_KEY {
                matrix.include = Some(list);
            } else {
                matrix.exclude = Some(list);
            }
        }

        for (key, value) in dimensions {
            let values = Self::dimension_values(value, &child_path(path, key))?;
            matrix.entries.insert(key.clone(), values);
        }

        Ok(matrix)
    }

    fn dimension_values(value: &Value, path: &str) -> Result<Vec<String>, SchemaError> {
        let items = value.as_array().ok_or_else(|| {
            SchemaError::new("dimension must be a list of strings", path)
                .with_found(value.type_name())
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::scalar(item, &index_path(path, i)))
            .collect()
    }

    fn directive_list(value: &Value, path: &str) -> Result<Vec<Directive>, SchemaError> {
        let items = value.as_array().ok_or_else(|| {
            SchemaError::new("must be a list of mappings", path)
                .with_found(value.type_name())
                .with_suggestion("each entry starts with '-', e.g. `- os: linux`")
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::directive(item, &index_path(path, i)))
            .collect()
    }

    fn directive(value: &Value, path: &str) -> Result<Directive, SchemaError> {
        let fields = value.as_object().ok_or_else(|| {
            SchemaError::new("entry must be a flat mapping of dimension names to values", path)
                .with_found(value.type_name())
        })?;

        fields
            .iter()
            .map(|(key, value)| {
                Self::scalar(value, &child_path(path, key)).map(|v| (key.clone(), v))
            })
            .collect()
    }

    fn scalar(value: &Value, path: &str) -> Result<String, SchemaError> {
        value.as_scalar_string().ok_or_else(|| {
            SchemaError::new("expected a string", path).with_found(value.type_name())
        })
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}
