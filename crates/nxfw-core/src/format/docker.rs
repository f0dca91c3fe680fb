//! Docker registries, probed through the v2 manifest endpoint.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEMO_IMAGE: &str = "sonatypecommunity/docker-policy-demo";

static PACKAGES: &[Package] = &[
    // Security
    Package::new(DEMO_IMAGE, "Security-Critical", PolicyName::SecurityCritical),
    Package::new(DEMO_IMAGE, "Security-High", PolicyName::SecurityHigh),
    Package::new(DEMO_IMAGE, "Security-Medium", PolicyName::SecurityMedium),
    Package::new(DEMO_IMAGE, "Security-Low", PolicyName::SecurityLow),
    Package::new(DEMO_IMAGE, "Security-Malicious", PolicyName::SecurityMalicious),
    Package::new(DEMO_IMAGE, "Integrity-Suspicious", PolicyName::IntegrityRating),
    Package::new(DEMO_IMAGE, "Integrity-Pending", PolicyName::IntegrityRating),
];

/// Name IQ Server gives a quarantined image pulled through a proxy:
/// `{host}-{repository}-{image}-{tag}` with dots turned into dashes.
pub fn docker_label(repo_base_url: &str, repository_name: &str, image: &str, tag: &str) -> String {
    format!("{}-{}-{}-{}", repo_base_url, repository_name, image, tag).replace('.', "-")
}

pub struct DockerFormat;

impl PackageFormat for DockerFormat {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn display_name(&self) -> &'static str {
        "Docker"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        // version carries the tag
        format!(
            "{}/repository/{}/v2/{}/manifests/{}",
            base_url, repo_name, pkg.name, pkg.version
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        format!("{}:{}", pkg.name, pkg.version)
    }
}
