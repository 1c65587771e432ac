// Matrix Preview
// Runs parse -> scan -> validate -> identify -> expand over a whole document

use crate::error::{ServiceError, ServiceResult};
use crate::matrix::expander::MatrixExpander;
use crate::matrix::identity::IdentityAssigner;
use crate::matrix::models::MatrixResult;
use crate::matrix::scanner::DocumentScanner;
use crate::matrix::schema::MatrixValidator;
use crate::parser::error::SchemaError;
use crate::parser::models::Value;
use crate::parser::DocumentParser;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Entry point for previewing every matrix in a document
pub struct MatrixPreview;

impl MatrixPreview {
    /// Preview all matrices in a YAML string.
    ///
    /// Stops at the first parse or schema error; no partial list is returned.
    pub fn preview(content: &str) -> ServiceResult<Vec<MatrixResult>> {
        let document = DocumentParser::parse(content)?;
        let results = Self::preview_document(&document)?;
        Ok(results)
    }

    /// Preview all matrices in a YAML file
    pub fn preview_file<P: AsRef<Path>>(path: P) -> ServiceResult<Vec<MatrixResult>> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::preview(&content)
    }

    /// Preview all matrices in an already parsed document
    pub fn preview_document(document: &Value) -> Result<Vec<MatrixResult>, SchemaError> {
        let occurrences = DocumentScanner::scan(document);
        debug!(matrices = occurrences.len(), "scanned document");

        let mut identity = IdentityAssigner::new();
        let mut results = Vec::with_capacity(occurrences.len());

        for occurrence in occurrences {
            let matrix = MatrixValidator::canonicalize(occurrence.value, &occurrence.path)?;
            let id = identity.assign(&matrix);
            let expansion = MatrixExpander::expand(&matrix);
            results.push(MatrixResult::new(id, occurrence.path, matrix, expansion));
        }

        Ok(results)
    }
}

/// What the latest update did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// New results are available
    Updated {
        /// Ids that were also present in the last successful run
        retained: Vec<String>,
        /// Ids seen for the first time
        fresh: Vec<String>,
    },
    /// The run failed; the error is available from [`PreviewSession::state`]
    Failed,
}

/// Current output of a session
#[derive(Debug)]
pub enum PreviewState<'a> {
    Empty,
    Ready(&'a [MatrixResult]),
    Failed(&'a ServiceError),
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Empty,
    Ready(Vec<MatrixResult>),
    Failed(ServiceError),
}

/// Re-runs the preview on every edit and tracks which matrix ids survive.
///
/// A failed run discards the previous output, but the ids of the last
/// successful run are remembered so state can be reattached once the
/// document parses again.
#[derive(Debug, Default)]
pub struct PreviewSession {
    state: SessionState,
    known_ids: Vec<String>,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, content: &str) -> PreviewOutcome {
        match MatrixPreview::preview(content) {
            Ok(results) => {
                let (retained, fresh): (Vec<String>, Vec<String>) = results
                    .iter()
                    .map(|result| result.id.clone())
                    .partition(|id| self.known_ids.contains(id));

                debug!(
                    retained = retained.len(),
                    fresh = fresh.len(),
                    "preview updated"
                );

                self.known_ids = results.iter().map(|result| result.id.clone()).collect();
                self.state = SessionState::Ready(results);
                PreviewOutcome::Updated { retained, fresh }
            }
            Err(err) => {
                warn!(error = %err, "preview failed");
                self.state = SessionState::Failed(err);
                PreviewOutcome::Failed
            }
        }
    }

    pub fn state(&self) -> PreviewState<'_> {
        match &self.state {
            SessionState::Empty => PreviewState::Empty,
            SessionState::Ready(results) => PreviewState::Ready(results),
            SessionState::Failed(err) => PreviewState::Failed(err),
        }
    }

    /// Results of the latest run, if it succeeded
    pub fn results(&self) -> Option<&[MatrixResult]> {
        match &self.state {
            SessionState::Ready(results) => Some(results),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKFLOW: &str = r#"
name: CI
on: [push]
jobs:
  test:
    runs-on: ${{ matrix.os }}
    strategy:
      matrix:
        os: [ubuntu-latest, windows-latest]
        node: [18, 20]
        exclude:
          - os: windows-latest
            node: 18
  lint:
    strategy:
      matrix:
        rust: [stable]
"#;

    #[test]
    fn test_preview_workflow() {
        let results = MatrixPreview::preview(WORKFLOW).unwrap();
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].path, "jobs.test.strategy.matrix");
        assert_eq!(results[0].combinations.len(), 3);
        assert_eq!(results[0].actions.len(), 1);
        assert!(results[0].id.ends_with("-0"));

        assert_eq!(results[1].path, "jobs.lint.strategy.matrix");
        assert_eq!(results[1].combinations.len(), 1);
        assert!(results[1].id.ends_with("-1"));
    }

    #[test]
    fn test_preview_without_matrices() {
        assert!(MatrixPreview::preview("name: CI\n").unwrap().is_empty());
        assert!(MatrixPreview::preview("").unwrap().is_empty());
    }

    #[test]
    fn test_schema_error_fails_whole_run() {
        let source = "a:\n  matrix:\n    os: [linux]\nb:\n  matrix:\n    os: linux\n";
        let err = MatrixPreview::preview(source).unwrap_err();
        match err {
            ServiceError::Schema(schema) => assert_eq!(schema.path, "b.matrix.os"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error() {
        let err = MatrixPreview::preview("matrix: [unclosed\n").unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[test]
    fn test_preview_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ci.yml");
        std::fs::write(&path, WORKFLOW).unwrap();

        let results = MatrixPreview::preview_file(&path).unwrap();
        assert_eq!(results.len(), 2);

        let missing = MatrixPreview::preview_file(dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(missing, ServiceError::Io(_)));
    }

    #[test]
    fn test_session_tracks_retained_ids() {
        let mut session = PreviewSession::new();
        assert!(matches!(session.state(), PreviewState::Empty));

        let outcome = session.update(WORKFLOW);
        match outcome {
            PreviewOutcome::Updated { retained, fresh } => {
                assert!(retained.is_empty());
                assert_eq!(fresh.len(), 2);
            }
            PreviewOutcome::Failed => panic!("expected update"),
        }

        let edited = WORKFLOW.replace("rust: [stable]", "rust: [stable, beta]");
        match session.update(&edited) {
            PreviewOutcome::Updated { retained, fresh } => {
                assert_eq!(retained.len(), 1);
                assert_eq!(fresh.len(), 1);
            }
            PreviewOutcome::Failed => panic!("expected update"),
        }
        assert_eq!(session.results().unwrap()[1].combinations.len(), 2);
    }

    #[test]
    fn test_session_failure_discards_output_but_remembers_ids() {
        let mut session = PreviewSession::new();
        session.update(WORKFLOW);

        assert_eq!(session.update("jobs: [broken\n"), PreviewOutcome::Failed);
        assert!(session.results().is_none());
        assert!(matches!(session.state(), PreviewState::Failed(ServiceError::Parse(_))));

        match session.update(WORKFLOW) {
            PreviewOutcome::Updated { retained, fresh } => {
                assert_eq!(retained.len(), 2);
                assert!(fresh.is_empty());
            }
            PreviewOutcome::Failed => panic!("expected update"),
        }
    }
}
