//! Command-line options. Everything here only shapes startup; once the UI
//! is running the session is self-contained.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::catalog::{load_seed_file, Catalog};

#[derive(Parser, Debug)]
#[command(name = "biblioteca", version, about = "Terminal book catalog")]
pub struct Cli {
    /// Load the initial catalog from a JSON seed file
    #[arg(long, value_name = "FILE", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with an empty catalog
    #[arg(long)]
    pub empty: bool,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log destination [default: ~/.biblioteca-digital/biblioteca.log]
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the catalog the session starts with.
    pub fn initial_catalog(&self) -> Result<Catalog> {
        if self.empty {
            return Ok(Catalog::new());
        }
        match &self.seed {
            Some(path) => load_seed_file(path)
                .with_context(|| format!("failed to load seed file {}", path.display())),
            None => Ok(Catalog::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_builtin_seed() {
        let cli = Cli::parse_from(["biblioteca"]);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.initial_catalog().unwrap().len(), 8);
    }

    #[test]
    fn empty_flag_starts_blank() {
        let cli = Cli::parse_from(["biblioteca", "--empty"]);
        assert!(cli.initial_catalog().unwrap().is_empty());
    }

    #[test]
    fn seed_and_empty_conflict() {
        let parsed = Cli::try_parse_from(["biblioteca", "--empty", "--seed", "books.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn seed_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Ficciones", "author": "Jorge Luis Borges"}}]"#).unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["biblioteca", "--seed", path.as_str()]);
        let catalog = cli.initial_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].author, "Jorge Luis Borges");
    }

    #[test]
    fn missing_seed_file_reports_path() {
        let cli = Cli::parse_from(["biblioteca", "--seed", "/nonexistent/books.json"]);
        let err = cli.initial_catalog().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/books.json"));
    }
}
