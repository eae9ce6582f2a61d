//! Command-line interface module for dirsort.
//!
//! This module defines the argument structure and drives a full run:
//! it invokes the organizer on the requested directory and renders the
//! resulting report, either as formatted terminal output or as JSON.

use crate::organizer::{OrganizeReport, Organizer};
use crate::output::OutputFormatter;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Sort files into category subdirectories based on their extensions.
#[derive(Debug, Parser)]
#[command(name = "dirsort")]
#[command(about = "Sort files into category subdirectories based on their extensions")]
#[command(version)]
pub struct Cli {
    /// Directory to organize
    pub directory: PathBuf,

    /// Print the report as JSON instead of the formatted summary
    #[arg(long)]
    pub json: bool,
}

/// JSON view of a finished run, printed by `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    directory: String,
    categories: Vec<JsonCategory<'a>>,
    skipped: Vec<JsonIssue<'a>>,
    failures: Vec<JsonIssue<'a>>,
    total_moved: usize,
}

#[derive(Serialize)]
struct JsonCategory<'a> {
    category: &'a str,
    files: &'a [String],
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    path: String,
    reason: &'a str,
}

/// Runs the organization described by the parsed arguments and renders the
/// report.
///
/// Returns `Err` only when the run itself could not start (invalid root) or
/// the JSON report could not be serialized; per-entry problems are part of
/// the rendered report.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::{run, Cli};
/// use std::path::PathBuf;
///
/// let cli = Cli {
///     directory: PathBuf::from("/path/to/directory"),
///     json: false,
/// };
/// match run(&cli) {
///     Ok(()) => println!("Operation completed successfully"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run(cli: &Cli) -> Result<(), String> {
    let organizer = Organizer::new();

    if cli.json {
        let report = organizer
            .organize(&cli.directory)
            .map_err(|e| e.to_string())?;
        let rendered = render_json(&cli.directory, &report)?;
        println!("{}", rendered);
        return Ok(());
    }

    OutputFormatter::info(&format!(
        "Organizing contents of: {}",
        cli.directory.display()
    ));

    let spinner = OutputFormatter::create_spinner("Moving files...");
    let result = organizer.organize(&cli.directory);
    spinner.finish_and_clear();
    let report = result.map_err(|e| e.to_string())?;

    render_text(&report);
    Ok(())
}

/// Renders the report as formatted terminal output.
fn render_text(report: &OrganizeReport) {
    if report.summary.is_empty() {
        OutputFormatter::plain("No files needed organizing.");
    } else {
        for (category, files) in report.summary.iter() {
            OutputFormatter::header(&format!("Moved to {}/", category));
            for file in files {
                OutputFormatter::plain(&format!(" - {}", file));
            }
        }
        OutputFormatter::summary_table(&report.summary);
    }

    for (path, reason) in &report.skipped_entries {
        OutputFormatter::warning(&format!("Skipped {}: {}", path.display(), reason));
    }
    for (path, reason) in &report.failed_entries {
        OutputFormatter::error(&format!("Failed {}: {}", path.display(), reason));
    }

    println!();
    if report.is_complete_success() {
        OutputFormatter::success("Organization complete!");
    } else {
        OutputFormatter::warning("Organization finished with issues. Review the messages above.");
    }
}

/// Renders the report as a pretty-printed JSON document.
fn render_json(directory: &std::path::Path, report: &OrganizeReport) -> Result<String, String> {
    let json_report = JsonReport {
        directory: directory.display().to_string(),
        categories: report
            .summary
            .iter()
            .map(|(category, files)| JsonCategory { category, files })
            .collect(),
        skipped: report
            .skipped_entries
            .iter()
            .map(|(path, reason)| JsonIssue {
                path: path.display().to_string(),
                reason,
            })
            .collect(),
        failures: report
            .failed_entries
            .iter()
            .map(|(path, reason)| JsonIssue {
                path: path.display().to_string(),
                reason,
            })
            .collect(),
        total_moved: report.summary.total_files(),
    };

    serde_json::to_string_pretty(&json_report)
        .map_err(|e| format!("Failed to serialize report: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory_argument() {
        let cli = Cli::try_parse_from(["dirsort", "/tmp/downloads"]).expect("Parse failed");
        assert_eq!(cli.directory, PathBuf::from("/tmp/downloads"));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_json_flag() {
        let cli = Cli::try_parse_from(["dirsort", "/tmp/downloads", "--json"])
            .expect("Parse failed");
        assert!(cli.json);
    }

    #[test]
    fn test_parse_requires_directory() {
        let result = Cli::try_parse_from(["dirsort"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_json_shape() {
        use crate::organizer::organize;
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("notes.txt"), "notes").expect("Failed to write file");

        let report = organize(temp_dir.path()).expect("Organize failed");
        let rendered = render_json(temp_dir.path(), &report).expect("Render failed");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("Invalid JSON produced");

        assert_eq!(value["total_moved"], 1);
        assert_eq!(value["categories"][0]["category"], "Documents");
        assert_eq!(value["categories"][0]["files"][0], "notes.txt");
        assert!(value["failures"].as_array().expect("missing failures").is_empty());
    }
}
