// Identity Assigner
// Stable per-matrix ids for reattaching presentation state across re-parses

use crate::matrix::models::{CanonicalMatrix, Directive};
use crate::matrix::schema::{EXCLUDE_KEY, INCLUDE_KEY};

use std::collections::BTreeMap;

/// Hands out `<canonical json>-<occurrence>` ids within a single document parse.
///
/// Create a fresh assigner for every parse so the occurrence counter restarts at 0.
#[derive(Debug, Default)]
pub struct IdentityAssigner {
    counter: usize,
}

impl IdentityAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next matrix in document order
    pub fn assign(&mut self, matrix: &CanonicalMatrix) -> String {
        let id = format!("{}-{}", canonical_json(matrix), self.counter);
        self.counter += 1;
        id
    }
}

/// Key-sorted JSON of the matrix block as written: dimensions alongside
/// `include`/`exclude`, so key order in the source never changes the id
pub fn canonical_json(matrix: &CanonicalMatrix) -> String {
    let mut root: BTreeMap<String, serde_json::Value> = matrix
        .entries
        .iter()
        .map(|(name, values)| (name.clone(), serde_json::Value::from(values.clone())))
        .collect();

    if let Some(include) = &matrix.include {
        root.insert(INCLUDE_KEY.to_string(), directives_json(include));
    }
    if let Some(exclude) = &matrix.exclude {
        root.insert(EXCLUDE_KEY.to_string(), directives_json(exclude));
    }

    serde_json::Value::Object(root.into_iter().collect()).to_string()
}

fn directives_json(directives: &[Directive]) -> serde_json::Value {
    serde_json::Value::Array(
        directives
            .iter()
            .map(|directive| {
                serde_json::Value::Object(
                    directive
                        .iter()
                        .map(|(k, v)| (k.clone(), serde_json::Value::from(v.as_str())))
                        .collect(),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::schema::MatrixValidator;
    use crate::parser::DocumentParser;

    fn canonical(source: &str) -> CanonicalMatrix {
        let document = DocumentParser::parse(source).unwrap();
        MatrixValidator::canonicalize(&document, "matrix").unwrap()
    }

    #[test]
    fn test_canonical_json_sorts_keys() {
        let matrix = canonical("os: [linux]\ninclude:\n  - z: '1'\n    a: '2'\narch: [x64]\n");
        assert_eq!(
            canonical_json(&matrix),
            r#"{"arch":["x64"],"include":[{"a":"2","z":"1"}],"os":["linux"]}"#
        );
    }

    #[test]
    fn test_key_order_does_not_change_id() {
        let first = canonical("os: [linux, mac]\nnode: [18]\nexclude:\n  - os: mac\n    node: 18\n");
        let second = canonical("exclude:\n  - node: 18\n    os: mac\nnode: [18]\nos: [linux, mac]\n");

        assert_eq!(
            IdentityAssigner::new().assign(&first),
            IdentityAssigner::new().assign(&second)
        );
    }

    #[test]
    fn test_value_order_changes_id() {
        let first = canonical("os: [linux, mac]\n");
        let second = canonical("os: [mac, linux]\n");
        assert_ne!(canonical_json(&first), canonical_json(&second));
    }

    #[test]
    fn test_identical_blocks_get_distinct_ids() {
        let matrix = canonical("os: [linux]\n");
        let mut assigner = IdentityAssigner::new();

        let first = assigner.assign(&matrix);
        let second = assigner.assign(&matrix);

        assert_eq!(first, r#"{"os":["linux"]}-0"#);
        assert_eq!(second, r#"{"os":["linux"]}-1"#);
    }
}
