//! CLI presenter for output formatting

use std::io::{self, Write};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Width of the label column in two-column output
const LABEL_WIDTH: usize = 24;

/// Presenter for CLI output formatting
pub struct Presenter {
    bar: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { bar: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Start a 0-100 progress bar with message
    pub fn start_progress(&mut self, message: &str) {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {msg} [{bar:20.cyan}] {pos:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█░ "),
        );
        bar.set_message(message.to_string());
        self.bar = Some(bar);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Move the progress bar
    pub fn set_progress(&self, position: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_position(position);
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output text to stdout without newline
    pub fn output_inline(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Print an empty line
    pub fn blank(&self) {
        println!();
    }

    /// Print a section heading
    pub fn section(&self, title: &str) {
        println!("{}", title.cyan().bold());
    }

    /// Print a detail row with dotted leader
    pub fn detail(&self, label: &str, value: &str) {
        println!("  {}", format_detail(label, value));
    }

    /// Print a plain line indented under a section
    pub fn line(&self, text: &str) {
        println!("  {}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Label padded with dots up to the value column
pub fn format_detail(label: &str, value: &str) -> String {
    let dots = LABEL_WIDTH.saturating_sub(label.chars().count() + 1).max(2);
    format!("{} {} {}", label, ".".repeat(dots).dimmed(), value)
}

/// Yes/No with color
pub fn yes_no(value: bool) -> String {
    if value {
        "Yes".green().to_string()
    } else {
        "No".normal().to_string()
    }
}

/// Supported/Not Supported with color
pub fn supported(value: bool) -> String {
    if value {
        "Supported".green().to_string()
    } else {
        "Not Supported".dimmed().to_string()
    }
}

/// Shown when a value is absent
pub fn not_set() -> String {
    "(not set)".dimmed().to_string()
}
