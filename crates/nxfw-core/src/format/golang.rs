//! Go module proxies.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_EXTENSION: &str = "zip";

static PACKAGES: &[Package] = &[
    // Security
    Package::new("github.com/tmc/langchaingo", "v0.1.6", PolicyName::SecurityCritical)
        .with_extension("zip"),
    Package::new("golang.org/x/crypto", "v0.3.0", PolicyName::SecurityHigh).with_extension("zip"),
    Package::new("github.com/hashicorp/yamux", "v0.1.1", PolicyName::SecurityMedium)
        .with_extension("zip"),
    // Legal
    Package::new("github.com/lcomrade/lenpaste", "v1.3.1", PolicyName::LicenseBanned)
        .with_extension("zip"),
    Package::new(
        "github.com/sonatype-nexus-community/nexus-repo-api-client-go/v3",
        "v3.81.6",
        PolicyName::LicenseNone,
    )
    .with_extension("zip"),
    Package::new("go.wit.com/lib/cobol", "v0.0.29", PolicyName::LicenseCopyleft).with_extension("zip"),
    Package::new("github.com/unidoc/unipdf/v3", "v3.69.0", PolicyName::LicenseNonStandard)
        .with_extension("zip"),
];

pub struct GolangFormat;

impl PackageFormat for GolangFormat {
    fn name(&self) -> &'static str {
        "go"
    }

    fn display_name(&self) -> &'static str {
        "Golang"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        // `@v` is sent pre-encoded
        format!(
            "{}/repository/{}/{}/%40v/{}.{}",
            base_url,
            repo_name,
            pkg.name,
            pkg.version,
            pkg.extension_or(DEFAULT_EXTENSION)
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        pkg.coordinates()
    }
}
