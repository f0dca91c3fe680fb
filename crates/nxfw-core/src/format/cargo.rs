//! Cargo (crates.io) repositories.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

static PACKAGES: &[Package] = &[
    Package::new("hyper", "0.14.9", PolicyName::SecurityCritical),
    Package::new("abi_stable", "0.8.4", PolicyName::SecurityHigh),
];

pub struct CargoFormat;

impl PackageFormat for CargoFormat {
    fn name(&self) -> &'static str {
        "cargo"
    }

    fn display_name(&self) -> &'static str {
        "Cargo"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        format!(
            "{}/repository/{}/crates/{}/{}/download",
            base_url, repo_name, pkg.name, pkg.version
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        format!("{}@{} (.crate)", pkg.name, pkg.version)
    }
}
