//! Table of contents generation for markdown files.

use std::path::{Path, PathBuf};

use clap::Args;
use mdtoc_config::{CliSettings, Config};
use mdtoc_core::{TocOptions, update_document};
use rayon::prelude::*;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for generating a table of contents.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Markdown files to process.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Write to FILE instead of modifying in place (single input only).
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Max heading depth to include (1-6, default: 3).
    #[arg(short, long, allow_negative_numbers = true)]
    levels: Option<i64>,

    /// Print result to stdout instead of modifying the file.
    #[arg(long)]
    stdout: bool,

    /// Include the first heading in the table of contents.
    #[arg(long)]
    include_first: bool,

    /// Path to configuration file (default: auto-discover mdtoc.toml).
    #[arg(short, long, env = "MDTOC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Result of processing one file, before anything is written.
#[derive(Debug, PartialEq, Eq)]
enum FileOutcome {
    /// Nothing to list; the file is left alone.
    NoHeadings,
    /// Regenerated content equals the input.
    Unchanged(String),
    /// Content with a new table of contents.
    Updated(String),
}

impl GenerateArgs {
    /// Execute the command.
    ///
    /// Files are processed in parallel and reported in argument order.
    ///
    /// # Errors
    ///
    /// Returns an error if arguments or configuration are invalid, or if any
    /// file could not be read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let max_level = self.validate()?;

        let settings = CliSettings {
            max_level,
            include_first: self.include_first.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }
        let options = config.toc.options();

        let outcomes: Vec<_> = self
            .files
            .par_iter()
            .map(|file| process_file(file, options))
            .collect();

        let total = outcomes.len();
        let mut errors = Vec::new();
        for (file, outcome) in self.files.iter().zip(outcomes) {
            if let Err(err) = outcome.and_then(|outcome| self.emit(file, outcome, &output)) {
                errors.push(err);
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 if total == 1 => Err(errors.remove(0)),
            failed => {
                for err in &errors {
                    output.error(&format!("Error: {err}"));
                }
                Err(CliError::Failed { failed, total })
            }
        }
    }

    /// Check argument combinations clap cannot express.
    ///
    /// Returns `--levels` narrowed to a heading level.
    fn validate(&self) -> Result<Option<u8>, CliError> {
        let max_level = self
            .levels
            .map(|levels| {
                u8::try_from(levels)
                    .ok()
                    .filter(|level| (1..=6).contains(level))
                    .ok_or_else(|| {
                        CliError::Validation("--levels must be between 1 and 6".to_owned())
                    })
            })
            .transpose()?;
        if self.output.is_some() && self.files.len() > 1 {
            return Err(CliError::Validation(
                "--output requires exactly one input file".to_owned(),
            ));
        }
        Ok(max_level)
    }

    /// Print or write the outcome for one file.
    fn emit(&self, file: &Path, outcome: FileOutcome, output: &Output) -> Result<(), CliError> {
        let content = match outcome {
            FileOutcome::NoHeadings => {
                output.warning(&format!(
                    "No headings found to generate TOC: {}",
                    file.display()
                ));
                return Ok(());
            }
            FileOutcome::Unchanged(content) => {
                if !self.stdout && self.output.is_none() {
                    output.info(&format!("TOC already up to date in {}", file.display()));
                    return Ok(());
                }
                content
            }
            FileOutcome::Updated(content) => content,
        };

        if self.stdout {
            output.document(&content)?;
        } else if let Some(path) = &self.output {
            write_file(path, &content)?;
            output.success(&format!("TOC written to {}", path.display()));
        } else {
            write_file(file, &content)?;
            output.success(&format!("TOC added to {}", file.display()));
        }
        Ok(())
    }
}

/// Read a file and compute its updated content.
fn process_file(path: &Path, options: TocOptions) -> Result<FileOutcome, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::NotFound(path.to_path_buf())
        } else {
            CliError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let outcome = match update_document(&content, options) {
        None => FileOutcome::NoHeadings,
        Some(updated) if updated == content => FileOutcome::Unchanged(updated),
        Some(updated) => FileOutcome::Updated(updated),
    };
    tracing::debug!(path = %path.display(), ?options, "Processed file");
    Ok(outcome)
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    std::fs::write(path, content).map_err(|e| CliError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
