use crate::commands::{preview_or_exit, read_input};
use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

/// Check that a document parses and every matrix in it is well-formed
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the YAML document, or `-` to read stdin
    pub file: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    output::status("Validating", &format!("{}", args.file.display()));

    let content = read_input(&args.file)?;
    let results = preview_or_exit(&content);

    output::check("YAML syntax valid");

    if results.is_empty() {
        output::warning("No `matrix` keys found in the document");
        return Ok(());
    }

    for result in &results {
        output::check(&format!(
            "{}: {} dimension(s), {} combination(s)",
            result.path,
            result.matrix.entries.len(),
            result.combinations.len()
        ));
    }

    println!();
    output::success(&format!("{} matrix block(s) valid", results.len()));

    Ok(())
}
