//! Console rendering of a check run.

use console::style;
use indicatif::ProgressBar;
use nxfw_core::{CheckOutcome, CheckReporter, CheckResult, CheckSummary, Package, PackageFormat};

use crate::output::{styled_outcome, styled_policy, Output};
use crate::progress::ProgressManager;

/// Prints one line per package as results arrive
pub struct ConsoleReporter<'a> {
    output: &'a Output,
    progress: &'a ProgressManager,
    spinner: Option<ProgressBar>,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(output: &'a Output, progress: &'a ProgressManager) -> Self {
        Self {
            output,
            progress,
            spinner: None,
        }
    }
}

impl CheckReporter for ConsoleReporter<'_> {
    fn on_start(&mut self, package: &Package, label: &str, index: usize, total: usize) {
        let message = format!("Checking {} {}", label, styled_policy(package.policy));
        self.spinner = Some(self.progress.create_check_spinner(index, total, &message));
    }

    fn on_result(&mut self, result: &CheckResult) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }

        let subject = format!("{} {}", result.label, styled_policy(result.package.policy));
        match &result.outcome {
            CheckOutcome::Available => self.output.success(&format!("Package available: {}", subject)),
            CheckOutcome::QuarantinedExpected { .. } => {
                self.output.success(&format!("Quarantined as expected: {}", subject))
            }
            outcome => self.output.failure(&format!("{}: {}", subject, outcome)),
        }
        if let Some(url) = &result.url {
            log::debug!("{} -> HTTP {:?}", url, result.http_status);
        }
    }
}

/// Everything the run will do, shown before confirmation
pub fn print_configuration(
    output: &Output,
    nexus_url: &str,
    iq_url: &str,
    format: &dyn PackageFormat,
    repository: &str,
) {
    output.section("Configuration Summary");
    output.writeln(&format!("Nexus URL:  {}", nexus_url));
    output.writeln(&format!("IQ URL:     {}", iq_url));
    output.writeln(&format!("Format:     {}", format.display_name()));
    output.writeln(&format!("Repository: {}", repository));
    output.writeln("");
    output.writeln("Packages to check:");

    for package in format.packages() {
        output.list_item(
            "-",
            &format!("{} {}", format.format_label(package), styled_policy(package.policy)),
        );
    }
    output.writeln("");
}

pub fn print_summary(output: &Output, summary: &CheckSummary) {
    output.section("Check Summary");
    output.writeln(&style(format!("Available:                   {}", summary.available)).green().to_string());
    output.writeln(&style(format!("Quarantined (expected):      {}", summary.quarantined_expected)).cyan().to_string());
    output.writeln(&style(format!("Quarantined (other policy):  {}", summary.quarantined_unexpected)).yellow().to_string());
    output.writeln(&style(format!("Blocked (not quarantined):   {}", summary.blocked_unknown)).yellow().to_string());
    output.writeln(&style(format!("Not Available:               {}", summary.failed)).red().to_string());

    output.section("Policy Breakdown");
    for line in &summary.lines {
        output.writeln(&format!(
            "{}: {} {}",
            styled_policy(line.policy),
            line.label,
            styled_outcome(&line.outcome)
        ));
    }

    if summary.cancelled {
        output.warning(&format!(
            "Check cancelled, {} packages were checked",
            summary.total()
        ));
    }
}
