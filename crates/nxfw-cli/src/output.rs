//! Output formatting for CLI.

use console::{style, StyledObject, Term};
use nxfw_core::{CheckOutcome, PolicyName, Severity};
use std::io::Write;

/// Output handler for CLI
pub struct Output {
    term: Term,
    json_mode: bool,
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            json_mode: false,
        }
    }

    /// Enable JSON output mode
    pub fn set_json_mode(&mut self, json: bool) {
        self.json_mode = json;
    }

    /// Write a line
    pub fn writeln(&self, message: &str) {
        if !self.json_mode {
            let _ = writeln!(&self.term, "{}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json_mode {
            let _ = writeln!(&self.term, "{}", style(message).cyan());
        }
    }

    pub fn success(&self, message: &str) {
        if !self.json_mode {
            let _ = writeln!(&self.term, "{} {}", style("✓").green().bold(), style(message).green());
        }
    }

    pub fn failure(&self, message: &str) {
        if !self.json_mode {
            let _ = writeln!(&self.term, "{} {}", style("✗").red().bold(), style(message).red());
        }
    }

    /// Warnings are shown in JSON mode too, they go to stderr
    pub fn warning(&self, message: &str) {
        let _ = writeln!(&self.term, "{} {}", style("Warning:").yellow().bold(), message);
    }

    /// Write a section header
    pub fn section(&self, title: &str) {
        if !self.json_mode {
            let _ = writeln!(&self.term, "\n{}", style(format!("=== {} ===", title)).yellow().bold());
        }
    }

    /// Write a list item
    pub fn list_item(&self, prefix: &str, message: &str) {
        if !self.json_mode {
            let _ = writeln!(&self.term, "  {} {}", style(prefix).green(), message);
        }
    }

    /// Write JSON output to stdout
    pub fn json<T: serde::Serialize>(&self, data: &T) -> anyhow::Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// `[Policy-Name]` coloured by severity
pub fn styled_policy(policy: PolicyName) -> StyledObject<String> {
    let text = format!("[{}]", policy);
    match policy.severity() {
        Severity::Critical => style(text).red(),
        Severity::High => style(text).magenta(),
        Severity::Medium => style(text).yellow(),
        Severity::Other => style(text),
    }
}

pub fn styled_outcome(outcome: &CheckOutcome) -> StyledObject<String> {
    let text = format!("[{}]", outcome_label(outcome));
    match outcome {
        CheckOutcome::Available => style(text).green(),
        CheckOutcome::QuarantinedExpected { .. } => style(text).cyan(),
        CheckOutcome::QuarantinedUnexpected { .. } | CheckOutcome::BlockedUnknown => {
            style(text).yellow()
        }
        CheckOutcome::Unavailable { .. } | CheckOutcome::Failed { .. } => style(text).red(),
    }
}

/// Short bucket name for the breakdown table
pub fn outcome_label(outcome: &CheckOutcome) -> &'static str {
    match outcome {
        CheckOutcome::Available => "Available",
        CheckOutcome::QuarantinedExpected { .. } => "Quarantined",
        CheckOutcome::QuarantinedUnexpected { .. } => "Quarantined (other policy)",
        CheckOutcome::BlockedUnknown => "Blocked",
        CheckOutcome::Unavailable { .. } | CheckOutcome::Failed { .. } => "Not Available",
    }
}
