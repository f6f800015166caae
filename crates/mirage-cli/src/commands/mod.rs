//! CLI command implementations

pub mod check;
pub mod detect;
pub mod explain;
pub mod rules;

pub use check::CheckArgs;
pub use detect::DetectArgs;
pub use explain::ExplainArgs;
pub use rules::RulesArgs;

use anyhow::Context;
use clap::Subcommand;
use std::io::Read;
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a snippet, file or directory for issues
    Check(CheckArgs),

    /// Print the language a snippet is detected as
    Detect(DetectArgs),

    /// Show detailed explanation for a specific rule
    Explain(ExplainArgs),

    /// List the rule library
    Rules(RulesArgs),
}

/// `-` stands for standard input.
pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub(crate) fn read_source(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
