use serde::Serialize;
use std::fmt;

use crate::package::Package;

/// Why a package check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The catalog name could not be turned into a URL
    MalformedPackageName,
    /// The probe did not produce a status
    Transport,
    /// The quarantine lookup failed
    Firewall,
}

/// Terminal state of one package check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    Available,
    QuarantinedExpected { policy: String },
    QuarantinedUnexpected { policy: Option<String> },
    /// 403 without a matching quarantine entry
    BlockedUnknown,
    /// Any status other than 200 or 403
    Unavailable { status: u16 },
    Failed { kind: FailureKind, reason: String },
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Available => write!(f, "available"),
            CheckOutcome::QuarantinedExpected { policy } => {
                write!(f, "quarantined by {}", policy)
            }
            CheckOutcome::QuarantinedUnexpected { policy: Some(policy) } => {
                write!(f, "quarantined by unexpected policy {}", policy)
            }
            CheckOutcome::QuarantinedUnexpected { policy: None } => {
                write!(f, "quarantined by unexpected policy")
            }
            CheckOutcome::BlockedUnknown => write!(f, "blocked, not found in quarantine"),
            CheckOutcome::Unavailable { status } => write!(f, "unavailable (HTTP {})", status),
            CheckOutcome::Failed { reason, .. } => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub package: Package,
    pub format: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn available(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Available)
    }

    pub fn quarantined(&self) -> bool {
        matches!(
            self.outcome,
            CheckOutcome::QuarantinedExpected { .. } | CheckOutcome::QuarantinedUnexpected { .. }
        )
    }

    pub fn quarantined_expected_policy(&self) -> bool {
        matches!(self.outcome, CheckOutcome::QuarantinedExpected { .. })
    }

    pub fn failed(&self) -> bool {
        matches!(
            self.outcome,
            CheckOutcome::Unavailable { .. } | CheckOutcome::Failed { .. }
        )
    }

    pub fn blocked_unknown(&self) -> bool {
        matches!(self.outcome, CheckOutcome::BlockedUnknown)
    }
}
