use crate::commands::{preview_or_exit, read_input};
use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use matrix_service::{MatrixReporter, ReportFormat};

/// Expand every build matrix in a YAML document
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Path to the YAML document, or `-` to read stdin
    pub file: PathBuf,

    /// Output format: terminal, json
    #[arg(long, short = 'o', default_value = "terminal", env = "MATRIXVIEW_FORMAT")]
    pub format: String,

    /// Also print initial sets, includes, excludes and the action trace
    #[arg(long, short = 'd')]
    pub details: bool,
}

pub fn execute(args: ExpandArgs) -> Result<()> {
    let format: ReportFormat = args
        .format
        .parse()
        .map_err(|e: String| color_eyre::eyre::eyre!("{}", e))?;

    let content = read_input(&args.file)?;
    let results = preview_or_exit(&content);

    if results.is_empty() && format == ReportFormat::Terminal {
        output::warning("No `matrix` keys found in the document");
        return Ok(());
    }

    let report = MatrixReporter::report(&results, format, args.details)?;
    print!("{}", report);
    if format == ReportFormat::Json {
        println!();
    }

    Ok(())
}
