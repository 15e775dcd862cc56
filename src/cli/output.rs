use console::style;
use std::fmt::Display;

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print a warning message
    pub fn warning<T: Display>(message: T) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    /// Print an info message
    pub fn info<T: Display>(message: T) {
        println!("{} {}", style("ℹ").cyan(), message);
    }

    /// Print a sub-item with arrow prefix
    pub fn sub_item<T: Display>(message: T) {
        println!("  {} {}", style("→").dim(), message);
    }

    /// Print one planned branch update as `branch -> message`
    pub fn plan_line<B: Display, M: Display>(branch: B, message: M) {
        println!("{} -> {}", style(branch).cyan(), message);
    }

    /// Echo a command about to be executed
    pub fn command<T: Display>(command: T) {
        println!("{} {}", style(">>").dim(), style(command).yellow());
    }
}
