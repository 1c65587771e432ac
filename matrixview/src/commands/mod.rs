pub mod expand;
pub mod validate;

use crate::output;

use std::io::Read;
use std::path::Path;

use color_eyre::Result;

use matrix_service::{MatrixPreview, MatrixResult, ServiceError};

/// Read the document at `path`, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    if !path.exists() {
        color_eyre::eyre::bail!("File not found: {}", path.display());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Run the preview pipeline, printing parse and schema errors and exiting on failure
pub fn preview_or_exit(content: &str) -> Vec<MatrixResult> {
    match MatrixPreview::preview(content) {
        Ok(results) => results,
        Err(ServiceError::Parse(e)) => {
            output::error(&format!("Parse error at line {}:{}: {}", e.line, e.column, e.message));
            if !e.context.is_empty() {
                output::dim(e.context.trim_end());
            }
            if let Some(suggestion) = &e.suggestion {
                output::info(&format!("  Suggestion: {}", suggestion));
            }
            std::process::exit(1);
        }
        Err(ServiceError::Schema(e)) => {
            let found = e.found.map(|f| format!(", found {}", f)).unwrap_or_default();
            output::error(&format!("Invalid matrix at '{}': {}{}", e.path, e.message, found));
            if let Some(suggestion) = &e.suggestion {
                output::info(&format!("  Suggestion: {}", suggestion));
            }
            std::process::exit(1);
        }
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
