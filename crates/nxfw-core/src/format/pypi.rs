//! PyPI repositories.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_EXTENSION: &str = "tar.gz";

static PACKAGES: &[Package] = &[
    Package::new("django", "1.6", PolicyName::SecurityCritical)
        .with_extension("whl")
        .with_qualifier("py2.py3-none-any"),
    Package::new("flask", "0.12", PolicyName::SecurityHigh)
        .with_extension("whl")
        .with_qualifier("py2.py3-none-any"),
    Package::new("click", "7.0", PolicyName::SecurityMedium)
        .with_extension("whl")
        .with_qualifier("py2.py3-none-any"),
];

pub struct PyPiFormat;

impl PyPiFormat {
    /// `name-version.tar.gz` for sdists, `name-version-qualifier.ext` for wheels
    fn filename(pkg: &Package) -> String {
        let extension = pkg.extension_or(DEFAULT_EXTENSION);
        match pkg.qualifier {
            Some(qualifier) if extension != "tar.gz" => {
                format!("{}-{}-{}.{}", pkg.name, pkg.version, qualifier, extension)
            }
            _ => format!("{}-{}.{}", pkg.name, pkg.version, extension),
        }
    }
}

impl PackageFormat for PyPiFormat {
    fn name(&self) -> &'static str {
        "pypi"
    }

    fn display_name(&self) -> &'static str {
        "PyPI"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        format!(
            "{}/repository/{}/packages/{}/{}/{}",
            base_url,
            repo_name,
            pkg.name.to_lowercase(),
            pkg.version,
            Self::filename(pkg)
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
