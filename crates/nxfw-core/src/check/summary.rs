use serde::Serialize;

use super::result::{CheckOutcome, CheckResult};
use super::runner::CheckRun;
use crate::package::PolicyName;

/// One line of the final report
#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub policy: PolicyName,
    pub label: String,
    pub outcome: CheckOutcome,
}

/// Counts per outcome bucket plus one line per package.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub format: String,
    pub available: usize,
    pub quarantined_expected: usize,
    pub quarantined_unexpected: usize,
    pub blocked_unknown: usize,
    pub failed: usize,
    pub cancelled: bool,
    pub lines: Vec<SummaryLine>,
}

impl CheckSummary {
    pub fn from_run(run: &CheckRun) -> Self {
        let mut summary = Self::from_results(&run.results);
        summary.format = run.format.to_string();
        summary.cancelled = run.cancelled;
        summary
    }

    pub fn from_results(results: &[CheckResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            match &result.outcome {
                CheckOutcome::Available => summary.available += 1,
                CheckOutcome::QuarantinedExpected { .. } => summary.quarantined_expected += 1,
                CheckOutcome::QuarantinedUnexpected { .. } => summary.quarantined_unexpected += 1,
                CheckOutcome::BlockedUnknown => summary.blocked_unknown += 1,
                CheckOutcome::Unavailable { .. } | CheckOutcome::Failed { .. } => {
                    summary.failed += 1
                }
            }
            summary.lines.push(SummaryLine {
                policy: result.package.policy,
                label: result.label.clone(),
                outcome: result.outcome.clone(),
            });
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// True when every package behaved as its policy predicts.
    ///
    /// Packages expecting no policy must be available; all others must be
    /// quarantined under their own policy.
    pub fn all_expected(&self) -> bool {
        !self.cancelled && self.lines.iter().all(SummaryLine::as_expected)
    }
}

impl SummaryLine {
    pub fn as_expected(&self) -> bool {
        match self.policy {
            PolicyName::NoPolicy => matches!(self.outcome, CheckOutcome::Available),
            _ => matches!(self.outcome, CheckOutcome::QuarantinedExpected { .. }),
        }
    }
}
