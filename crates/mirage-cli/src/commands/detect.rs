//! Detect command - reports which language a snippet is classified as

use crate::commands::read_source;
use anyhow::Result;
use clap::Args;
use mirage_core::detect_language;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// File to classify, or `-` to read from stdin
    #[arg(value_name = "PATH", default_value = "-")]
    pub path: PathBuf,
}

impl DetectArgs {
    /// The file extension is ignored; only the text is classified.
    pub fn run(&self) -> Result<()> {
        let source = read_source(&self.path)?;
        let language = detect_language(&source);
        tracing::debug!(path = %self.path.display(), %language, "Detected language");
        println!("{}", language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn detect_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.txt");
        fs::write(&path, "package main\n\nfunc main() {}\n").unwrap();

        assert!(DetectArgs { path }.run().is_ok());
    }

    #[test]
    fn detect_fails_on_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(DetectArgs { path }.run().is_err());
    }
}
