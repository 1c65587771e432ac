// Document Scanner
// Finds every value stored under a `matrix` key, at any depth, in document order

use crate::parser::models::Value;

/// Key that marks a matrix block
pub const MATRIX_KEY: &str = "matrix";

/// A raw matrix block located in a document
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixOccurrence<'a> {
    /// Dotted key path from the document root, e.g. `jobs.build.strategy.matrix`
    pub path: String,
    /// The unvalidated matrix value
    pub value: &'a Value,
}

/// Depth-first, pre-order walk over mapping nodes
pub struct DocumentScanner;

impl DocumentScanner {
    /// Collect every `matrix` occurrence in `document`.
    ///
    /// Only mappings are descended into; sequences and scalars end the walk.
    /// A matrix value that is itself a mapping is searched as well, after
    /// the occurrence has been recorded.
    pub fn scan(document: &Value) -> Vec<MatrixOccurrence<'_>> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        Self::visit(document, &mut path, &mut found);
        found
    }

    fn visit<'a>(
        value: &'a Value,
        path: &mut Vec<&'a str>,
        found: &mut Vec<MatrixOccurrence<'a>>,
    ) {
        let Some(entries) = value.as_object() else {
            return;
        };

        for (key, child) in entries {
            path.push(key);
            if key == MATRIX_KEY {
                found.push(MatrixOccurrence {
                    path: path.join("."),
                    value: child,
                });
            }
            Self::visit(child, path, found);
            path.pop();
        }
    }
}
