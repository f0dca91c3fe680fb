//! Quarantine reconciliation.
//!
//! A 403 from a proxy repository only says the download was refused. The
//! reconciler looks the component up in the quarantine listing to find out
//! whether the firewall quarantined it, and under which policy.

use super::client::QuarantineSource;
use super::coordinates::Coordinates;
use super::model::QuarantinedComponent;
use crate::error::{CheckError, Result};
use crate::format::{docker_label, split_maven_name};
use crate::package::{Package, PolicyName};

/// What to look for in the quarantine listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantineQuery {
    /// Registry key of the format (`maven2`, `npm`, ...)
    pub format: String,
    /// Package name as it appears in the catalog
    pub package_name: String,
    /// Name sent as the listing filter and compared against entries
    pub component_name: String,
    pub component_version: String,
    pub repository_name: String,
    /// Host of the repository manager URL, used for Docker labels
    pub repo_base_url: String,
    pub expected_policy: PolicyName,
}

impl QuarantineQuery {
    pub fn for_package(
        format: &str,
        package: &Package,
        repository_name: &str,
        repo_base_url: &str,
    ) -> Result<Self> {
        let component_name = match format {
            "maven2" => {
                let (_, artifact) = split_maven_name(package.name).ok_or_else(|| {
                    CheckError::MalformedPackageName {
                        format: format.to_string(),
                        name: package.name.to_string(),
                    }
                })?;
                artifact.to_string()
            }
            "docker" => docker_label(repo_base_url, repository_name, package.name, package.version),
            _ => package.name.to_string(),
        };

        Ok(Self {
            format: format.to_string(),
            package_name: package.name.to_string(),
            component_name,
            component_version: package.version.to_string(),
            repository_name: repository_name.to_string(),
            repo_base_url: repo_base_url.to_string(),
            expected_policy: package.policy,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuarantineStatus {
    pub quarantined: bool,
    pub expected_policy_triggered: bool,
    /// Policy of the matched entry
    pub policy_name: Option<String>,
}

/// Find the first listing entry matching the query.
pub fn evaluate(entries: &[QuarantinedComponent], query: &QuarantineQuery) -> QuarantineStatus {
    for entry in entries {
        if !entry.quarantined {
            continue;
        }

        let identifier = &entry.component_identifier;
        let coordinates = match Coordinates::parse(&identifier.format, &identifier.coordinates) {
            Ok(Some(coordinates)) => coordinates,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Skipping quarantine entry: {}", e);
                continue;
            }
        };

        if coordinates.version() != query.component_version {
            continue;
        }
        if !coordinates
            .comparison_names(query)
            .iter()
            .any(|name| *name == query.component_name)
        {
            continue;
        }

        let expected = entry
            .policy_name
            .as_deref()
            .is_some_and(|policy| query.expected_policy.is(policy));
        log::debug!(
            "{}@{} quarantined by {:?}",
            query.component_name,
            query.component_version,
            entry.policy_name
        );

        return QuarantineStatus {
            quarantined: true,
            expected_policy_triggered: expected,
            policy_name: entry.policy_name.clone(),
        };
    }

    QuarantineStatus::default()
}

/// Query the listing for the component and evaluate it.
pub async fn reconcile(
    source: &dyn QuarantineSource,
    query: &QuarantineQuery,
) -> Result<QuarantineStatus> {
    let entries = source
        .quarantine_list(&query.component_name, &query.repository_name)
        .await?;
    Ok(evaluate(&entries, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firewall::ComponentIdentifier;
    use std::collections::HashMap;

    fn entry(format: &str, pairs: &[(&str, &str)], policy: &str) -> QuarantinedComponent {
        QuarantinedComponent {
            component_identifier: ComponentIdentifier {
                format: format.to_string(),
                coordinates: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>(),
            },
            display_name: None,
            repository: None,
            quarantined: true,
            policy_name: Some(policy.to_string()),
            threat_level: None,
        }
    }

    fn npm_query(policy: PolicyName) -> QuarantineQuery {
        let package = Package::new("bson", "1.0.9", policy);
        QuarantineQuery::for_package("npm", &package, "npm-proxy", "nexus.example.com").unwrap()
    }

    #[test]
    fn test_matching_expected_policy() {
        let entries = vec![entry(
            "npm",
            &[("packageId", "bson"), ("version", "1.0.9")],
            "Security-Critical",
        )];
        let status = evaluate(&entries, &npm_query(PolicyName::SecurityCritical));

        assert!(status.quarantined);
        assert!(status.expected_policy_triggered);
        assert_eq!(status.policy_name.as_deref(), Some("Security-Critical"));
    }

    #[test]
    fn test_matching_other_policy() {
        let entries = vec![entry(
            "npm",
            &[("packageId", "bson"), ("version", "1.0.9")],
            "Security-High",
        )];
        let status = evaluate(&entries, &npm_query(PolicyName::SecurityCritical));

        assert!(status.quarantined);
        assert!(!status.expected_policy_triggered);
    }

    #[test]
    fn test_first_match_wins() {
        let entries = vec![
            entry("npm", &[("packageId", "bson"), ("version", "1.0.9")], "Security-High"),
            entry("npm", &[("packageId", "bson"), ("version", "1.0.9")], "Security-Critical"),
        ];
        let status = evaluate(&entries, &npm_query(PolicyName::SecurityCritical));

        assert!(status.quarantined);
        assert!(!status.expected_policy_triggered);
        assert_eq!(status.policy_name.as_deref(), Some("Security-High"));
    }

    #[test]
    fn test_no_match() {
        let entries = vec![
            entry("npm", &[("packageId", "bson"), ("version", "1.0.10")], "Security-Critical"),
            entry("npm", &[("packageId", "bsonx"), ("version", "1.0.9")], "Security-Critical"),
            entry("npm", &[("packageId", "bson")], "Security-Critical"),
        ];
        let status = evaluate(&entries, &npm_query(PolicyName::SecurityCritical));
        assert_eq!(status, QuarantineStatus::default());
    }

    #[test]
    fn test_released_entries_ignored() {
        let mut released = entry(
            "npm",
            &[("packageId", "bson"), ("version", "1.0.9")],
            "Security-Critical",
        );
        released.quarantined = false;

        let status = evaluate(&[released], &npm_query(PolicyName::SecurityCritical));
        assert!(!status.quarantined);
    }

    #[test]
    fn test_malformed_entry_skipped() {
        let entries = vec![
            entry("npm", &[("name", "bson"), ("version", "1.0.9")], "Security-High"),
            entry("npm", &[("packageId", "bson"), ("version", "1.0.9")], "Security-Critical"),
        ];
        let status = evaluate(&entries, &npm_query(PolicyName::SecurityCritical));
        assert!(status.expected_policy_triggered);
    }

    #[test]
    fn test_pypi_underscore_variant() {
        let package = Package::new("my-pkg", "1.0", PolicyName::SecurityHigh);
        let query = QuarantineQuery::for_package("pypi", &package, "pypi-proxy", "h").unwrap();

        for listed in ["my-pkg", "my_pkg"] {
            let entries = vec![entry("pypi", &[("name", listed), ("version", "1.0")], "Security-High")];
            assert!(evaluate(&entries, &query).expected_policy_triggered, "{}", listed);
        }
    }

    #[test]
    fn test_maven_query_uses_artifact() {
        let package = Package::new("org.jsoup/jsoup", "1.13.1", PolicyName::SecurityHigh);
        let query =
            QuarantineQuery::for_package("maven2", &package, "maven-proxy", "nexus.example.com")
                .unwrap();
        assert_eq!(query.component_name, "jsoup");

        let entries = vec![entry(
            "maven",
            &[("groupId", "org.jsoup"), ("artifactId", "jsoup"), ("version", "1.13.1")],
            "Security-High",
        )];
        assert!(evaluate(&entries, &query).expected_policy_triggered);
    }

    #[test]
    fn test_maven_malformed_name() {
        let package = Package::new("jsoup", "1.13.1", PolicyName::SecurityHigh);
        let err = QuarantineQuery::for_package("maven2", &package, "maven-proxy", "h").unwrap_err();
        assert!(matches!(err, CheckError::MalformedPackageName { .. }));
    }

    #[test]
    fn test_golang_entries_match_go() {
        let package = Package::new("golang.org/x/crypto", "v0.0.0-20200622213623-75b288015ac9", PolicyName::SecurityHigh);
        let query = QuarantineQuery::for_package("go", &package, "go-proxy", "h").unwrap();
        let entries = vec![entry(
            "golang",
            &[("name", "golang.org/x/crypto"), ("version", "v0.0.0-20200622213623-75b288015ac9")],
            "Security-High",
        )];
        assert!(evaluate(&entries, &query).expected_policy_triggered);
    }

    #[test]
    fn test_docker_label_matches() {
        let package = Package::new(
            "sonatypecommunity/docker-policy-demo",
            "Security-Critical",
            PolicyName::SecurityCritical,
        );
        let query =
            QuarantineQuery::for_package("docker", &package, "dockerhub-proxy", "repo.example.com")
                .unwrap();
        assert_eq!(
            query.component_name,
            "repo-example-com-dockerhub-proxy-sonatypecommunity/docker-policy-demo-Security-Critical"
        );

        let entries = vec![entry("docker", &[("version", "Security-Critical")], "Security-Critical")];
        assert!(evaluate(&entries, &query).expected_policy_triggered);
    }
}
