//! Per-format component coordinates.

use std::collections::HashMap;

use super::QuarantineQuery;
use crate::error::{CheckError, Result};
use crate::format::docker_label;

/// Identity of a quarantined component, parsed from its coordinate map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coordinates {
    /// cargo, conda, go: `name` + `version`
    Named { name: String, version: String },
    /// maven: the group is carried but never compared
    Maven {
        group_id: Option<String>,
        artifact_id: String,
        version: String,
    },
    /// pypi: `name` + `version`, compared with hyphen/underscore variants
    Pypi { name: String, version: String },
    /// hf-model: `repo_id` + `version`
    HfModel { repo_id: String, version: String },
    /// docker: only the version is taken from the coordinates
    Docker { version: String },
    /// everything else: `packageId` + `version`
    Generic { package_id: String, version: String },
}

impl Coordinates {
    /// Parse the coordinate map of a listing entry.
    ///
    /// Entries without a `version` are not comparable and yield `Ok(None)`.
    /// A missing name field is `MalformedCoordinates`.
    pub fn parse(format: &str, coordinates: &HashMap<String, String>) -> Result<Option<Self>> {
        let Some(version) = coordinates.get("version").cloned() else {
            return Ok(None);
        };

        let required = |field: &'static str| -> Result<String> {
            coordinates
                .get(field)
                .cloned()
                .ok_or_else(|| CheckError::MalformedCoordinates {
                    format: format.to_string(),
                    field,
                })
        };

        let parsed = match format {
            "cargo" | "conda" | "go" | "golang" => Coordinates::Named {
                name: required("name")?,
                version,
            },
            "maven" => Coordinates::Maven {
                group_id: coordinates.get("groupId").cloned(),
                artifact_id: required("artifactId")?,
                version,
            },
            "pypi" => Coordinates::Pypi {
                name: required("name")?,
                version,
            },
            "hf-model" => Coordinates::HfModel {
                repo_id: required("repo_id")?,
                version,
            },
            "docker" => Coordinates::Docker { version },
            _ => Coordinates::Generic {
                package_id: required("packageId")?,
                version,
            },
        };

        Ok(Some(parsed))
    }

    pub fn version(&self) -> &str {
        match self {
            Coordinates::Named { version, .. }
            | Coordinates::Maven { version, .. }
            | Coordinates::Pypi { version, .. }
            | Coordinates::HfModel { version, .. }
            | Coordinates::Docker { version }
            | Coordinates::Generic { version, .. } => version,
        }
    }

    /// Names under which this entry may match the requested component
    pub fn comparison_names(&self, query: &QuarantineQuery) -> Vec<String> {
        match self {
            Coordinates::Named { name, .. } => vec![name.clone()],
            Coordinates::Maven { artifact_id, .. } => vec![artifact_id.clone()],
            Coordinates::Pypi { name, .. } => {
                let mut names = vec![name.clone()];
                for variant in [name.replace('-', "_"), name.replace('_', "-")] {
                    if !names.contains(&variant) {
                        names.push(variant);
                    }
                }
                names
            }
            Coordinates::HfModel { repo_id, .. } => vec![repo_id.clone()],
            Coordinates::Docker { .. } => vec![docker_label(
                &query.repo_base_url,
                &query.repository_name,
                &query.package_name,
                &query.component_version,
            )],
            Coordinates::Generic { package_id, .. } => vec![package_id.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PolicyName;

    fn coords(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn query(format: &str, name: &str, version: &str) -> QuarantineQuery {
        QuarantineQuery {
            format: format.to_string(),
            package_name: name.to_string(),
            component_name: name.to_string(),
            component_version: version.to_string(),
            repository_name: "proxy".to_string(),
            repo_base_url: "nexus.example.com".to_string(),
            expected_policy: PolicyName::SecurityHigh,
        }
    }

    #[test]
    fn test_missing_version_is_skipped() {
        let parsed = Coordinates::parse("npm", &coords(&[("packageId", "bson")])).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_missing_name_field_is_malformed() {
        let err = Coordinates::parse("maven", &coords(&[("groupId", "org.jsoup"), ("version", "1.13.1")]))
            .unwrap_err();
        assert!(matches!(
            err,
            CheckError::MalformedCoordinates { ref format, field: "artifactId" } if format == "maven"
        ));
    }

    #[test]
    fn test_parse_per_format() {
        assert_eq!(
            Coordinates::parse("golang", &coords(&[("name", "golang.org/x/crypto"), ("version", "v0.3.0")]))
                .unwrap(),
            Some(Coordinates::Named {
                name: "golang.org/x/crypto".to_string(),
                version: "v0.3.0".to_string()
            })
        );
        assert_eq!(
            Coordinates::parse("hf-model", &coords(&[("repo_id", "OuteAI/OuteTTS"), ("version", "abc")]))
                .unwrap(),
            Some(Coordinates::HfModel {
                repo_id: "OuteAI/OuteTTS".to_string(),
                version: "abc".to_string()
            })
        );
        assert_eq!(
            Coordinates::parse("nuget", &coords(&[("packageId", "log4net"), ("version", "2.0.3")]))
                .unwrap(),
            Some(Coordinates::Generic {
                package_id: "log4net".to_string(),
                version: "2.0.3".to_string()
            })
        );
        assert_eq!(
            Coordinates::parse("docker", &coords(&[("version", "Security-High")])).unwrap(),
            Some(Coordinates::Docker { version: "Security-High".to_string() })
        );
    }

    #[test]
    fn test_maven_compares_artifact_only() {
        let parsed = Coordinates::parse(
            "maven",
            &coords(&[("groupId", "org.jsoup"), ("artifactId", "jsoup"), ("version", "1.13.1")]),
        )
        .unwrap()
        .unwrap();

        assert_eq!(parsed.version(), "1.13.1");
        assert_eq!(parsed.comparison_names(&query("maven2", "jsoup", "1.13.1")), vec!["jsoup"]);
    }

    #[test]
    fn test_pypi_variants() {
        let parsed = Coordinates::parse("pypi", &coords(&[("name", "my_pkg"), ("version", "1.0")]))
            .unwrap()
            .unwrap();
        let names = parsed.comparison_names(&query("pypi", "my-pkg", "1.0"));
        assert_eq!(names, vec!["my_pkg", "my-pkg"]);
    }

    #[test]
    fn test_docker_name_is_synthesized() {
        let parsed = Coordinates::parse("docker", &coords(&[("version", "Security-Critical")]))
            .unwrap()
            .unwrap();
        let mut q = query("docker", "sonatypecommunity/docker-policy-demo", "Security-Critical");
        q.repo_base_url = "repo.example.com".to_string();
        q.repository_name = "dockerhub-proxy".to_string();

        assert_eq!(
            parsed.comparison_names(&q),
            vec!["repo-example-com-dockerhub-proxy-sonatypecommunity/docker-policy-demo-Security-Critical"]
        );
    }
}
