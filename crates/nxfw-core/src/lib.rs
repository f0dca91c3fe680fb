//! Core engine of the Nexus Repository Firewall policy tester.
//!
//! Turns pre-classified test packages into proxy download URLs, probes them,
//! and reconciles blocked downloads against the firewall quarantine listing.

pub mod check;
pub mod config;
pub mod error;
pub mod firewall;
pub mod format;
pub mod http;
pub mod package;
pub mod repository;

pub use check::{
    CheckOutcome, CheckReporter, CheckResult, CheckRun, CheckSummary, FailureKind, PolicyChecker,
    ProbeStatus, Prober,
};
pub use config::{AuthConfig, HttpBasicCredentials};
pub use error::{CheckError, Result};
pub use firewall::{FirewallClient, QuarantineQuery, QuarantineSource, QuarantineStatus};
pub use format::{FormatRegistry, PackageFormat};
pub use http::{HttpClient, HttpClientConfig, HttpError};
pub use package::{Package, PolicyName, Severity};
pub use repository::{NexusClient, RepositorySummary};
