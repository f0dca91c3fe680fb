//! Maven 2 repositories.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_EXTENSION: &str = "jar";

static PACKAGES: &[Package] = &[
    Package::new("com.amazonaws/aws-android-sdk-core", "2.75.0", PolicyName::SecurityCritical)
        .with_extension("aar"),
    Package::new("org.jsoup/jsoup", "1.13.1", PolicyName::SecurityHigh).with_extension("jar"),
    Package::new("ant/ant", "1.6.5", PolicyName::SecurityMedium).with_extension("jar"),
    Package::new("org.springframework/spring-context", "6.2.3", PolicyName::SecurityLow)
        .with_extension("jar"),
    Package::new("org.sonatype/maven-policy-demo", "1.1.0", PolicyName::SecurityMalicious)
        .with_extension("jar"),
    Package::new("org.sonatype/maven-policy-demo", "1.2.0", PolicyName::IntegritySuspicious)
        .with_extension("jar"),
    Package::new("org.sonatype/maven-policy-demo", "1.3.0", PolicyName::IntegrityPending)
        .with_extension("jar"),
];

/// Split a `group/artifact` name. `None` unless there is exactly one `/`.
pub fn split_maven_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(group), Some(artifact), None) => Some((group, artifact)),
        _ => None,
    }
}

pub struct MavenFormat;

impl PackageFormat for MavenFormat {
    fn name(&self) -> &'static str {
        "maven2"
    }

    fn display_name(&self) -> &'static str {
        "Maven"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        let Some((group, artifact)) = split_maven_name(pkg.name) else {
            log::warn!("Maven package name {} is not group/artifact", pkg.name);
            return String::new();
        };

        // com.amazonaws -> com/amazonaws
        let group_path = group.replace('.', "/");

        format!(
            "{}/repository/{}/{}/{}/{}/{}-{}.{}",
            base_url,
            repo_name,
            group_path,
            artifact,
            pkg.version,
            artifact,
            pkg.version,
            pkg.extension_or(DEFAULT_EXTENSION)
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        format!("{}@{} (.{})", pkg.name, pkg.version, pkg.extension_or(DEFAULT_EXTENSION))
    }
}
