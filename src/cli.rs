//! Command-line interface module for shelve.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing and target directory resolution
//! - The organize pass over a directory's immediate file entries
//! - Per-file failure recovery and the final summary

use crate::file_category::CategoryTable;
use crate::file_organizer::{FileOrganizer, OrganizeError, OrganizeResult, RunSummary};
use crate::output::OutputFormatter;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Organize the files of a folder into category subfolders by extension.
#[derive(Debug, Parser)]
#[command(name = "shelve", version, about)]
pub struct Cli {
    /// Folder to organize (default: the Downloads directory).
    pub folder: Option<PathBuf>,

    /// Overwrite files with the same name in destination folders.
    #[arg(long)]
    pub overwrite: bool,
}

/// Resolves the directory a run should organize.
///
/// An explicit argument wins; otherwise the platform Downloads directory is
/// used, falling back to `Downloads` under the home directory.
pub fn resolve_target(folder: Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(folder) = folder {
        return Ok(folder);
    }
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .ok_or_else(|| "Could not determine a Downloads directory; pass a folder".to_string())
}

/// Runs the CLI application with parsed arguments.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use shelve::cli::{Cli, run};
///
/// let cli = Cli::parse();
/// if let Err(e) = run(cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run(cli: Cli) -> Result<RunSummary, String> {
    let target = resolve_target(cli.folder)?;
    let table = CategoryTable::default();
    organize_directory(&target, &table, cli.overwrite).map_err(|e| e.to_string())
}

/// Organizes the immediate file entries of `base_path` into category
/// subdirectories.
///
/// This function:
/// 1. Fails fast if `base_path` is not an existing directory
/// 2. Lists immediate entries, skipping subdirectories
/// 3. Classifies each file by extension against `table`
/// 4. Moves it into its category directory, disambiguating collisions
///    unless `overwrite` is set
/// 5. Counts failures instead of aborting, and prints the final summary
///
/// Once the initial directory check passes the pass always completes; per-file
/// errors are printed and tallied in the returned [`RunSummary`].
pub fn organize_directory(
    base_path: &Path,
    table: &CategoryTable,
    overwrite: bool,
) -> OrganizeResult<RunSummary> {
    if !base_path.is_dir() {
        return Err(OrganizeError::InvalidTargetDir {
            path: base_path.to_path_buf(),
        });
    }

    let entries = fs::read_dir(base_path).map_err(|e| OrganizeError::ReadDirFailed {
        path: base_path.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
        {
            files.push(entry.path());
        }
    }

    OutputFormatter::info(&format!("Organizing contents of: {}", base_path.display()));

    let mut summary = RunSummary::default();
    let pb = OutputFormatter::create_progress_bar(files.len() as u64);

    for file_path in &files {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let (_, extension) = crate::file_organizer::split_extension(&file_name);
        let category = table.classify(extension);

        match FileOrganizer::move_to_category(base_path, file_path, category, overwrite) {
            Ok(_) => summary.moved += 1,
            Err(e) => {
                summary.failed += 1;
                pb.println(failure_line(file_path, &e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    OutputFormatter::summary(summary);
    Ok(summary)
}

/// Formats the diagnostic for one failed file.
///
/// Permission failures get the short form; everything else carries the
/// underlying io error rather than the full error chain, which already names
/// the file being moved.
fn failure_line(file_path: &Path, error: &OrganizeError) -> String {
    if error.is_permission_denied() {
        return format!("Permission denied: {}", file_path.display());
    }
    let detail = match error {
        OrganizeError::FileMoveFailed { source_error, .. } => source_error.to_string(),
        other => other.to_string(),
    };
    format!("Failed to move '{}': {}", file_path.display(), detail)
}
