//! CRAN (R) repositories, addressed through the source archive.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_EXTENSION: &str = "tar.gz";

static PACKAGES: &[Package] = &[
    Package::new("readxl", "0.1.0", PolicyName::SecurityHigh).with_extension("tar.gz"),
    Package::new("xgboost", "0.6-3", PolicyName::SecurityMedium).with_extension("tar.gz"),
];

pub struct CranFormat;

impl PackageFormat for CranFormat {
    fn name(&self) -> &'static str {
        "r"
    }

    fn display_name(&self) -> &'static str {
        "CRAN(R)"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        format!(
            "{}/repository/{}/src/contrib/Archive/{}/{}_{}.{}",
            base_url,
            repo_name,
            pkg.name,
            pkg.name,
            pkg.version,
            pkg.extension_or(DEFAULT_EXTENSION)
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        let extension = pkg.extension_or(DEFAULT_EXTENSION);
        match pkg.qualifier {
            Some(qualifier) => format!("{}@{} ({}, .{})", pkg.name, pkg.version, qualifier, extension),
            None => format!("{}@{} (.{})", pkg.name, pkg.version, extension),
        }
    }
}
