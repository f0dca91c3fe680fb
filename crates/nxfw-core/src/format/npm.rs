//! npm registries.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_EXTENSION: &str = "tgz";

static PACKAGES: &[Package] = &[
    Package::new("bson", "1.0.9", PolicyName::SecurityCritical).with_extension("tgz"),
    Package::new("braces", "1.8.5", PolicyName::SecurityHigh).with_extension("tgz"),
    Package::new("cookie", "0.3.1", PolicyName::SecurityMedium).with_extension("tgz"),
    Package::new("react-dom", "18.3.1", PolicyName::SecurityLow).with_extension("tgz"),
];

pub struct NpmFormat;

impl PackageFormat for NpmFormat {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn display_name(&self) -> &'static str {
        "NPM"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        // @scope/name: the tarball is named after the bare package name
        let file_stem = match pkg.name.split_once('/') {
            Some((_, bare)) => bare,
            None => pkg.name,
        };

        format!(
            "{}/repository/{}/{}/-/{}-{}.{}",
            base_url,
            repo_name,
            urlencoding::encode(pkg.name),
            file_stem,
            pkg.version,
            pkg.extension_or(DEFAULT_EXTENSION)
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        pkg.coordinates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let pkg = Package::new("bson", "1.0.9", PolicyName::SecurityCritical).with_extension("tgz");
        assert_eq!(
            NpmFormat.build_url("https://nexus.example.com", "npm-proxy", &pkg),
            "https://nexus.example.com/repository/npm-proxy/bson/-/bson-1.0.9.tgz"
        );
    }

    #[test]
    fn test_build_url_scoped() {
        let pkg = Package::new("@types/node", "20.1.0", PolicyName::SecurityLow);
        assert_eq!(
            NpmFormat.build_url("https://nexus.example.com", "npm-proxy", &pkg),
            "https://nexus.example.com/repository/npm-proxy/%40types%2Fnode/-/node-20.1.0.tgz"
        );
    }

    #[test]
    fn test_format_label() {
        assert_eq!(NpmFormat.format_label(&NpmFormat.packages()[3]), "react-dom@18.3.1");
    }
}
