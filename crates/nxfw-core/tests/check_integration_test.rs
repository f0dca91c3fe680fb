/// Integration tests for the check runner
///
/// The transport and the firewall are replaced with in-memory fakes so the
/// whole probe → reconcile → summary pipeline runs without a server.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use nxfw_core::check::{CheckReporter, CheckRun, SummaryLine};
use nxfw_core::firewall::{ComponentIdentifier, QuarantinedComponent};
use nxfw_core::format::{MavenFormat, NpmFormat};
use nxfw_core::{
    CheckError, CheckOutcome, CheckResult, FailureKind, FormatRegistry, HttpClient, HttpError,
    Package, PackageFormat, PolicyChecker, PolicyName, Prober, QuarantineSource,
};

const BASE: &str = "https://nexus.example.com";

/// Prober answering from a fixed URL → status table; unknown URLs are 404
#[derive(Default)]
struct FakeProber {
    statuses: HashMap<String, u16>,
    broken: Vec<String>,
    seen: Mutex<Vec<String>>,
}

impl FakeProber {
    fn status(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), status);
        self
    }

    fn broken(mut self, url: &str) -> Self {
        self.broken.push(url.to_string());
        self
    }
}

#[async_trait]
impl Prober for FakeProber {
    async fn probe(&self, url: &str) -> Result<u16, HttpError> {
        self.seen.lock().unwrap().push(url.to_string());
        if self.broken.iter().any(|u| u == url) {
            return Err(refused_connection().await);
        }
        Ok(self.statuses.get(url).copied().unwrap_or(404))
    }
}

/// Transport error from a real connection attempt to a closed local port
async fn refused_connection() -> HttpError {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    HttpClient::new()
        .unwrap()
        .get_status(&format!("http://127.0.0.1:{}/", port))
        .await
        .unwrap_err()
}

/// Quarantine listing keyed by component name
#[derive(Default)]
struct FakeFirewall {
    entries: HashMap<String, Vec<QuarantinedComponent>>,
    fail: bool,
    queries: Mutex<Vec<(String, String)>>,
}

impl FakeFirewall {
    fn quarantine(mut self, name: &str, format: &str, coords: &[(&str, &str)], policy: &str) -> Self {
        let entry = QuarantinedComponent {
            component_identifier: ComponentIdentifier {
                format: format.to_string(),
                coordinates: coords
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
            display_name: None,
            repository: None,
            quarantined: true,
            policy_name: Some(policy.to_string()),
            threat_level: None,
        };
        self.entries.entry(name.to_string()).or_default().push(entry);
        self
    }
}

#[async_trait]
impl QuarantineSource for FakeFirewall {
    async fn quarantine_list(
        &self,
        component_name: &str,
        repository_public_id: &str,
    ) -> nxfw_core::Result<Vec<QuarantinedComponent>> {
        self.queries
            .lock()
            .unwrap()
            .push((component_name.to_string(), repository_public_id.to_string()));
        if self.fail {
            return Err(CheckError::UnexpectedStatus {
                status: 500,
                url: "https://iq.example.com/api/v2/reports/components/quarantined".to_string(),
            });
        }
        Ok(self.entries.get(component_name).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
struct Recorder {
    started: Vec<(String, usize, usize)>,
    finished: usize,
}

impl CheckReporter for Recorder {
    fn on_start(&mut self, _package: &Package, label: &str, index: usize, total: usize) {
        self.started.push((label.to_string(), index, total));
    }

    fn on_result(&mut self, _result: &CheckResult) {
        self.finished += 1;
    }
}

fn npm_url(name: &str, version: &str) -> String {
    format!("{}/repository/npm-proxy/{}/-/{}-{}.tgz", BASE, name, name, version)
}

fn checker(prober: FakeProber, firewall: FakeFirewall, repository: &str) -> PolicyChecker {
    PolicyChecker::new(
        Arc::new(prober),
        Arc::new(firewall),
        BASE,
        repository,
        "nexus.example.com",
    )
}

#[tokio::test]
async fn test_npm_catalog_outcomes() {
    let prober = FakeProber::default()
        .status(&npm_url("bson", "1.0.9"), 403)
        .status(&npm_url("braces", "1.8.5"), 403)
        .status(&npm_url("cookie", "0.3.1"), 403)
        .status(&npm_url("react-dom", "18.3.1"), 200);
    let firewall = FakeFirewall::default()
        .quarantine("bson", "npm", &[("packageId", "bson"), ("version", "1.0.9")], "Security-Critical")
        .quarantine("braces", "npm", &[("packageId", "braces"), ("version", "1.8.5")], "Security-Medium");

    let checker = checker(prober, firewall, "npm-proxy");
    let mut recorder = Recorder::default();
    let run = checker.check_all(&NpmFormat, &mut recorder).await;

    assert!(!run.cancelled);
    assert_eq!(run.format, "npm");
    let outcomes: Vec<_> = run.results.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(
        outcomes,
        vec![
            CheckOutcome::QuarantinedExpected { policy: "Security-Critical".to_string() },
            CheckOutcome::QuarantinedUnexpected { policy: Some("Security-Medium".to_string()) },
            CheckOutcome::BlockedUnknown,
            CheckOutcome::Available,
        ]
    );
    assert_eq!(run.results[0].http_status, Some(403));
    assert_eq!(run.results[0].url.as_deref(), Some(npm_url("bson", "1.0.9").as_str()));

    assert_eq!(recorder.started.len(), 4);
    assert_eq!(recorder.started[0], ("bson@1.0.9".to_string(), 0, 4));
    assert_eq!(recorder.finished, 4);

    let summary = run.summary();
    assert_eq!(summary.format, "npm");
    assert_eq!(summary.quarantined_expected, 1);
    assert_eq!(summary.quarantined_unexpected, 1);
    assert_eq!(summary.blocked_unknown, 1);
    assert_eq!(summary.available, 1);
    assert!(!summary.all_expected());
}

#[tokio::test]
async fn test_reconciler_only_called_on_403() {
    let prober = FakeProber::default()
        .status(&npm_url("bson", "1.0.9"), 403)
        .status(&npm_url("braces", "1.8.5"), 200)
        .status(&npm_url("cookie", "0.3.1"), 500);
    let firewall = Arc::new(FakeFirewall::default());

    let checker = PolicyChecker::new(
        Arc::new(prober),
        firewall.clone(),
        BASE,
        "npm-proxy",
        "nexus.example.com",
    );
    let run = checker.check_all(&NpmFormat, &mut ()).await;

    let queries = firewall.queries.lock().unwrap().clone();
    assert_eq!(queries, vec![("bson".to_string(), "npm-proxy".to_string())]);

    assert_eq!(run.results[2].outcome, CheckOutcome::Unavailable { status: 500 });
    assert!(run.results[2].failed());
    assert_eq!(run.results[3].outcome, CheckOutcome::Unavailable { status: 404 });
}

#[tokio::test]
async fn test_transport_and_firewall_failures_continue() {
    let prober = FakeProber::default()
        .broken(&npm_url("bson", "1.0.9"))
        .status(&npm_url("braces", "1.8.5"), 403)
        .status(&npm_url("cookie", "0.3.1"), 200);
    let firewall = FakeFirewall {
        fail: true,
        ..Default::default()
    };

    let run = checker(prober, firewall, "npm-proxy")
        .check_all(&NpmFormat, &mut ())
        .await;

    assert_eq!(run.results.len(), 4);
    assert!(matches!(
        run.results[0].outcome,
        CheckOutcome::Failed { kind: FailureKind::Transport, .. }
    ));
    assert_eq!(run.results[0].http_status, None);
    assert!(matches!(
        &run.results[0].outcome,
        CheckOutcome::Failed { reason, .. } if reason.starts_with("Request failed")
    ));
    assert!(matches!(
        run.results[1].outcome,
        CheckOutcome::Failed { kind: FailureKind::Firewall, .. }
    ));
    assert_eq!(run.results[1].http_status, Some(403));
    assert!(run.results[2].available());
}

/// Maven driver with a catalog containing a name without a group
struct BrokenMaven;

static BROKEN_MAVEN: &[Package] = &[
    Package::new("jsoup", "1.13.1", PolicyName::SecurityHigh).with_extension("jar"),
    Package::new("org.jsoup/jsoup", "1.13.1", PolicyName::SecurityHigh).with_extension("jar"),
];

impl PackageFormat for BrokenMaven {
    fn name(&self) -> &'static str {
        "maven2"
    }

    fn display_name(&self) -> &'static str {
        "Maven"
    }

    fn packages(&self) -> &'static [Package] {
        BROKEN_MAVEN
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        MavenFormat.build_url(base_url, repo_name, pkg)
    }

    fn format_label(&self, pkg: &Package) -> String {
        MavenFormat.format_label(pkg)
    }
}

#[tokio::test]
async fn test_malformed_maven_name_is_not_probed() {
    let jsoup = format!("{}/repository/maven-proxy/org/jsoup/jsoup/1.13.1/jsoup-1.13.1.jar", BASE);
    let prober = Arc::new(FakeProber::default().status(&jsoup, 403));
    let firewall = FakeFirewall::default().quarantine(
        "jsoup",
        "maven",
        &[("groupId", "org.jsoup"), ("artifactId", "jsoup"), ("version", "1.13.1")],
        "Security-High",
    );

    let checker = PolicyChecker::new(
        prober.clone(),
        Arc::new(firewall),
        BASE,
        "maven-proxy",
        "nexus.example.com",
    );
    let run = checker.check_all(&BrokenMaven, &mut ()).await;

    assert!(matches!(
        run.results[0].outcome,
        CheckOutcome::Failed { kind: FailureKind::MalformedPackageName, .. }
    ));
    assert!(run.results[0].url.is_none());
    assert!(run.results[1].quarantined_expected_policy());
    assert_eq!(*prober.seen.lock().unwrap(), vec![jsoup]);
}

#[tokio::test]
async fn test_cancellation_stops_before_next_package() {
    let cancel = Arc::new(AtomicBool::new(false));

    struct CancelAfterFirst(Arc<AtomicBool>);
    impl CheckReporter for CancelAfterFirst {
        fn on_result(&mut self, _result: &CheckResult) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    let checker = checker(FakeProber::default(), FakeFirewall::default(), "npm-proxy")
        .with_cancellation(cancel.clone());
    let run: CheckRun = checker
        .check_all(&NpmFormat, &mut CancelAfterFirst(cancel))
        .await;

    assert!(run.cancelled);
    assert_eq!(run.results.len(), 1);
    let summary = run.summary();
    assert!(summary.cancelled);
    assert!(!summary.all_expected());
}

#[test]
fn test_every_builtin_catalog_builds_urls() {
    let registry = FormatRegistry::builtin();
    let checker = checker(FakeProber::default(), FakeFirewall::default(), "proxy");

    for format in registry.formats() {
        let run = tokio_test::block_on(checker.check_all(*format, &mut ()));
        assert_eq!(run.results.len(), format.packages().len());
        for result in &run.results {
            assert!(
                result.url.as_deref().is_some_and(|u| u.starts_with(BASE)),
                "{} {}",
                format.name(),
                result.label
            );
        }
    }
}

#[test]
fn test_summary_lines_follow_catalog_order() {
    let run = tokio_test::block_on(
        checker(FakeProber::default(), FakeFirewall::default(), "npm-proxy")
            .check_all(&NpmFormat, &mut ()),
    );
    let summary = run.summary();

    let labels: Vec<&str> = summary.lines.iter().map(|l: &SummaryLine| l.label.as_str()).collect();
    assert_eq!(labels, vec!["bson@1.0.9", "braces@1.8.5", "cookie@0.3.1", "react-dom@18.3.1"]);
    assert_eq!(summary.failed, 4);
}
