//! Sequential check runner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::probe::{ProbeStatus, Prober};
use super::result::{CheckOutcome, CheckResult, FailureKind};
use super::summary::CheckSummary;
use crate::firewall::{reconcile, QuarantineQuery, QuarantineSource, QuarantineStatus};
use crate::format::PackageFormat;
use crate::package::Package;

/// Receives progress while a format is being checked.
pub trait CheckReporter {
    fn on_start(&mut self, _package: &Package, _label: &str, _index: usize, _total: usize) {}

    fn on_result(&mut self, _result: &CheckResult) {}
}

/// Reporter that ignores every event
impl CheckReporter for () {}

/// Results of checking one format
#[derive(Debug, Clone)]
pub struct CheckRun {
    pub format: &'static str,
    pub results: Vec<CheckResult>,
    /// Set when the run stopped before the end of the catalog
    pub cancelled: bool,
}

impl CheckRun {
    pub fn summary(&self) -> CheckSummary {
        CheckSummary::from_run(self)
    }
}

/// Probes a format's catalog against one proxy repository.
pub struct PolicyChecker {
    prober: Arc<dyn Prober>,
    firewall: Arc<dyn QuarantineSource>,
    base_url: String,
    repository: String,
    repo_host: String,
    cancel: Option<Arc<AtomicBool>>,
}

impl PolicyChecker {
    pub fn new(
        prober: Arc<dyn Prober>,
        firewall: Arc<dyn QuarantineSource>,
        base_url: impl Into<String>,
        repository: impl Into<String>,
        repo_host: impl Into<String>,
    ) -> Self {
        Self {
            prober,
            firewall,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            repository: repository.into(),
            repo_host: repo_host.into(),
            cancel: None,
        }
    }

    /// Stop before the next package once `flag` is set
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Check every package of the format's catalog, in catalog order.
    pub async fn check_all(
        &self,
        format: &dyn PackageFormat,
        reporter: &mut dyn CheckReporter,
    ) -> CheckRun {
        let packages = format.packages();
        let total = packages.len();
        let mut results = Vec::with_capacity(total);
        let mut cancelled = false;

        log::info!(
            "Checking {} {} packages against {}",
            total,
            format.display_name(),
            self.repository
        );

        for (index, package) in packages.iter().enumerate() {
            if self.is_cancelled() {
                log::warn!("Cancelled after {} of {} packages", index, total);
                cancelled = true;
                break;
            }

            reporter.on_start(package, &format.format_label(package), index, total);
            let result = self.check_package(format, package).await;
            reporter.on_result(&result);
            results.push(result);
        }

        CheckRun {
            format: format.name(),
            results,
            cancelled,
        }
    }

    /// Probe one package and, if blocked, reconcile it against the quarantine.
    pub async fn check_package(&self, format: &dyn PackageFormat, package: &Package) -> CheckResult {
        let label = format.format_label(package);
        let url = format.build_url(&self.base_url, &self.repository, package);

        let mut result = CheckResult {
            package: *package,
            format: format.name(),
            label,
            url: None,
            http_status: None,
            outcome: CheckOutcome::BlockedUnknown,
        };

        if url.is_empty() {
            log::warn!("Cannot build a URL for {} package {}", format.name(), package.name);
            result.outcome = CheckOutcome::Failed {
                kind: FailureKind::MalformedPackageName,
                reason: format!("malformed package name: {}", package.name),
            };
            return result;
        }

        log::debug!("Probing {}", url);
        let probed = self.prober.probe(&url).await;
        result.url = Some(url);

        let status = match probed {
            Ok(status) => status,
            Err(e) => {
                log::warn!("Probe failed for {}: {}", result.label, e);
                result.outcome = CheckOutcome::Failed {
                    kind: FailureKind::Transport,
                    reason: e.to_string(),
                };
                return result;
            }
        };
        result.http_status = Some(status);

        result.outcome = match ProbeStatus::classify(status) {
            ProbeStatus::Available => CheckOutcome::Available,
            ProbeStatus::Unavailable(status) => CheckOutcome::Unavailable { status },
            ProbeStatus::Blocked => self.reconcile_blocked(format.name(), package).await,
        };
        result
    }

    async fn reconcile_blocked(&self, format: &str, package: &Package) -> CheckOutcome {
        let query =
            match QuarantineQuery::for_package(format, package, &self.repository, &self.repo_host) {
                Ok(query) => query,
                Err(e) => {
                    return CheckOutcome::Failed {
                        kind: FailureKind::MalformedPackageName,
                        reason: e.to_string(),
                    }
                }
            };

        match reconcile(self.firewall.as_ref(), &query).await {
            Ok(status) => outcome_for(status, package),
            Err(e) => {
                log::warn!("Quarantine lookup failed for {}: {}", query.component_name, e);
                CheckOutcome::Failed {
                    kind: FailureKind::Firewall,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn outcome_for(status: QuarantineStatus, package: &Package) -> CheckOutcome {
    match status {
        QuarantineStatus {
            quarantined: true,
            expected_policy_triggered: true,
            ..
        } => CheckOutcome::QuarantinedExpected {
            policy: package.policy.to_string(),
        },
        QuarantineStatus {
            quarantined: true,
            policy_name,
            ..
        } => CheckOutcome::QuarantinedUnexpected {
            policy: policy_name,
        },
        _ => CheckOutcome::BlockedUnknown,
    }
}
