//! mdtoc CLI - Markdown table of contents generator.
//!
//! Inserts or refreshes a `<!-- TOC -->` block after the first heading of
//! each given file. Files are modified in place unless `--stdout` or
//! `--output` is given.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::GenerateArgs;
use output::Output;

/// Generate and insert a table of contents into markdown files.
#[derive(Parser)]
#[command(name = "mdtoc", version, about)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["mdtoc"]).is_err());
    }

    #[test]
    fn test_cli_output_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["mdtoc", "README.md", "-o", "out.md", "--stdout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_accepts_all_flags() {
        let cli = Cli::try_parse_from([
            "mdtoc",
            "README.md",
            "--levels",
            "2",
            "--include-first",
            "--stdout",
            "-v",
        ])
        .unwrap();
        assert!(cli.args.verbose);
    }

    #[test]
    fn test_cli_accepts_multiple_files() {
        assert!(Cli::try_parse_from(["mdtoc", "a.md", "b.md", "-l", "4"]).is_ok());
    }
}
