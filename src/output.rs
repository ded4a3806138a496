//! Console output and styling.
//!
//! Centralizes CLI output so the organize pass prints failures and the final
//! summary consistently, with a progress bar over the move loop.

use crate::file_organizer::RunSummary;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Creates a progress bar sized for the organize pass.
    ///
    /// Diagnostics emitted while the bar is active should go through
    /// [`ProgressBar::println`] so they are not overdrawn.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints the final counters of an organize pass.
    pub fn summary(summary: RunSummary) {
        println!(
            "Organizing complete. Moved: {}, Failed: {}",
            summary.moved, summary.failed
        );
    }
}
