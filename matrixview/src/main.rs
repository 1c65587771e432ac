mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use commands::expand::ExpandArgs;
use commands::validate::ValidateArgs;

/// Preview the jobs a CI build matrix expands to
#[derive(Parser, Debug)]
#[command(name = "matrixview", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand every matrix in a document and print the resulting combinations
    Expand(ExpandArgs),
    /// Check a document without printing the combinations
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Expand(args) => commands::expand::execute(args),
        Command::Validate(args) => commands::validate::execute(args),
    }
}

/// `MATRIXVIEW_LOG` takes precedence over `-v` flags
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("MATRIXVIEW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
