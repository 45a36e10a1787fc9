//! Console reporter with colored output

use crate::{AnalysisResult, Finding, Severity};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Report an analysis result
    pub fn report(&self, result: &AnalysisResult) {
        println!();
        if result.feedback.is_empty() {
            println!("  {}", self.paint("No issues found.", |s| s.green()));
        } else {
            for finding in &result.feedback {
                self.print_finding(finding);
            }
        }
        println!();
        println!("{}", result.overall);
    }

    fn print_finding(&self, finding: &Finding) {
        let location = match finding.line {
            Some(line) => format!("line {}", line),
            None => "snippet".to_string(),
        };
        println!(
            "  {} [{}] {}",
            self.severity_label(finding.severity),
            location,
            finding.message
        );
        println!("     {}", self.paint(&finding.explanation, |s| s.dimmed()));
        println!("     Fix: {}", finding.suggestion);
    }

    fn severity_label(&self, severity: Severity) -> ColoredString {
        let label = match severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        if !self.use_colors {
            return label.normal();
        }
        match severity {
            Severity::Error => label.red().bold(),
            Severity::Warning => label.yellow().bold(),
            Severity::Info => label.cyan(),
        }
    }

    fn paint(&self, text: &str, style: fn(ColoredString) -> ColoredString) -> ColoredString {
        if self.use_colors {
            style(text.normal())
        } else {
            text.normal()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
