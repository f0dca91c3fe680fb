//! Firewall policy names.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The policy a test package is chosen to trigger.
///
/// String forms are the exact policy names IQ Server reports in the
/// quarantine listing, so they can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyName {
    SecurityCritical,
    SecurityHigh,
    SecurityMedium,
    SecurityLow,
    SecurityMalicious,
    IntegrityPending,
    IntegritySuspicious,
    IntegrityRating,
    LicenseBanned,
    LicenseNone,
    LicenseCopyleft,
    LicenseCommercial,
    LicenseThreatNotAssigned,
    LicenseAiMl,
    LicenseNonStandard,
    LicenseWeakCopyleft,
    /// No policy is expected to fire
    NoPolicy,
}

/// Console severity of a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Other,
    Medium,
    High,
    Critical,
}

impl PolicyName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyName::SecurityCritical => "Security-Critical",
            PolicyName::SecurityHigh => "Security-High",
            PolicyName::SecurityMedium => "Security-Medium",
            PolicyName::SecurityLow => "Security-Low",
            PolicyName::SecurityMalicious => "Security-Malicious",
            PolicyName::IntegrityPending => "Integrity-Pending",
            PolicyName::IntegritySuspicious => "Integrity-Suspicious",
            PolicyName::IntegrityRating => "Integrity-Rating",
            PolicyName::LicenseBanned => "License-Banned",
            PolicyName::LicenseNone => "License-None",
            PolicyName::LicenseCopyleft => "License-Copyleft",
            PolicyName::LicenseCommercial => "License-Commercial",
            PolicyName::LicenseThreatNotAssigned => "License-Threat Not Assigned",
            PolicyName::LicenseAiMl => "License-AI-ML",
            PolicyName::LicenseNonStandard => "License-Non Standard",
            PolicyName::LicenseWeakCopyleft => "License-Modified Weak Copyleft",
            PolicyName::NoPolicy => "None",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PolicyName::SecurityCritical => Severity::Critical,
            PolicyName::SecurityHigh => Severity::High,
            PolicyName::SecurityMedium => Severity::Medium,
            _ => Severity::Other,
        }
    }

    /// Whether a policy name reported by IQ Server is this policy
    pub fn is(&self, reported: &str) -> bool {
        self.as_str() == reported
    }

    pub fn all() -> &'static [PolicyName] {
        &[
            PolicyName::SecurityCritical,
            PolicyName::SecurityHigh,
            PolicyName::SecurityMedium,
            PolicyName::SecurityLow,
            PolicyName::SecurityMalicious,
            PolicyName::IntegrityPending,
            PolicyName::IntegritySuspicious,
            PolicyName::IntegrityRating,
            PolicyName::LicenseBanned,
            PolicyName::LicenseNone,
            PolicyName::LicenseCopyleft,
            PolicyName::LicenseCommercial,
            PolicyName::LicenseThreatNotAssigned,
            PolicyName::LicenseAiMl,
            PolicyName::LicenseNonStandard,
            PolicyName::LicenseWeakCopyleft,
            PolicyName::NoPolicy,
        ]
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyName::all()
            .iter()
            .copied()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| format!("Unknown policy name: {}", s))
    }
}

impl Serialize for PolicyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
