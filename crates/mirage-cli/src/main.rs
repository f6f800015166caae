//! Mirage CLI - Command-line interface for the Mirage code checker
//!
//! Scans code snippets for hallucinated APIs, risky constructs and other
//! mistakes typical of generated code, and reports a health score.

mod commands;
mod logging;
mod output;
mod report;
mod score;

use clap::Parser;
use commands::Commands;
use logging::LogLevel;

#[derive(Parser, Debug)]
#[command(
    name = "mirage",
    author,
    version,
    about = "Pattern-based checker for hallucinated APIs in generated code",
    long_about = "Mirage scans code snippets with a fixed library of per-language patterns.\n\n\
                  It reports hallucinated APIs, security risks and likely runtime errors,\n\
                  ranked by severity, with a suggested replacement and a 0-100 health score."
)]
pub struct Cli {
    #[arg(
        long,
        value_enum,
        default_value = "warn",
        global = true,
        help = "Set the log level"
    )]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level, cli.log_json);

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Detect(args) => args.run(),
        Commands::Explain(args) => args.run(),
        Commands::Rules(args) => args.run(),
    }
}
