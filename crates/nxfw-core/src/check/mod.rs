//! Package checks: probe each catalog entry, reconcile blocks, summarise.

mod probe;
mod result;
mod runner;
mod summary;

pub use probe::{ProbeStatus, Prober};
pub use result::{CheckOutcome, CheckResult, FailureKind};
pub use runner::{CheckReporter, CheckRun, PolicyChecker};
pub use summary::{CheckSummary, SummaryLine};
