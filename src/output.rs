//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output, including colored
//! messages, a debug-gated verbose channel, and a progress bar for the
//! relocation loop. Keeping output behind one type makes it easy to change
//! formatting globally and lets the core log without knowing about flags.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Console sink with consistent styling.
///
/// Carries the debug flag so verbose messages can be emitted from anywhere
/// without threading a boolean through every call site.
pub struct Console {
    debug: bool,
}

impl Console {
    /// Creates a console; `debug` enables the verbose channel.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(&self, message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a verbose message, only when debug output is enabled.
    pub fn debug(&self, message: &str) {
        if self.debug {
            println!("{} {}", "debug:".dimmed(), message);
        }
    }

    /// Creates a progress bar for file operations.
    pub fn progress_bar(&self, total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }
}
