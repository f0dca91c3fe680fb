//! NuGet repositories, via the v3 flat container.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

static PACKAGES: &[Package] = &[
    // Security
    Package::new("log4net", "2.0.3", PolicyName::SecurityCritical),
    Package::new("Newtonsoft.Json", "6.0.4", PolicyName::SecurityHigh),
    Package::new("Microsoft.Owin", "2.1.0", PolicyName::SecurityMedium),
    Package::new("Microsoft.AspNet.SignalR.Core", "2.0.3", PolicyName::SecurityLow),
    // License
    Package::new("LigerShark.WebOptimizer.Core", "3.0.344", PolicyName::LicenseNone),
    Package::new("MySql.Data", "8.0.27", PolicyName::LicenseCopyleft),
    Package::new("PayPalCheckoutSdk", "1.0.3", PolicyName::LicenseCommercial),
    // None
    Package::new("Microsoft.AspNetCore.Mvc.NewtonsoftJson", "5.0.3", PolicyName::NoPolicy),
];

pub struct NuGetFormat;

impl PackageFormat for NuGetFormat {
    fn name(&self) -> &'static str {
        "nuget"
    }

    fn display_name(&self) -> &'static str {
        "NuGet"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        let id = pkg.name.to_lowercase();
        format!(
            "{}/repository/{}/v3/content/0/{}/{}/{}.{}.nupkg",
            base_url, repo_name, id, pkg.version, id, pkg.version
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        format!("{}@{} (.nupkg)", pkg.name, pkg.version)
    }
}
