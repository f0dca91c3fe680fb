//! Conda channels.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_EXTENSION: &str = "tar.bz2";
const DEFAULT_CHANNEL: &str = "main";
const DEFAULT_PLATFORM: &str = "linux-64";
const DEFAULT_BUILD: &str = "0";

static PACKAGES: &[Package] = &[
    // Security
    Package::new("gettext", "0.19.8.1", PolicyName::SecurityCritical)
        .with_extension("tar.bz2")
        .with_qualifier("main/linux-64/h9b4dc7a_1"),
    Package::new("setuptools", "61.2.0", PolicyName::SecurityHigh)
        .with_extension("tar.bz2")
        .with_qualifier("main/linux-64/py310h06a4308_0"),
];

/// Where a Conda artifact lives: `channel/platform` plus its build string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CondaLocation<'a> {
    channel: &'a str,
    platform: &'a str,
    build: &'a str,
}

impl<'a> CondaLocation<'a> {
    /// Parse `channel/platform/build` or `platform/build`
    fn parse(qualifier: Option<&'a str>) -> Self {
        let parts: Vec<&str> = qualifier.map(|q| q.split('/').collect()).unwrap_or_default();
        match parts.as_slice() {
            [channel, platform, build, ..] => Self {
                channel: *channel,
                platform: *platform,
                build: *build,
            },
            [platform, build] => Self {
                channel: DEFAULT_CHANNEL,
                platform: *platform,
                build: *build,
            },
            _ => Self {
                channel: DEFAULT_CHANNEL,
                platform: DEFAULT_PLATFORM,
                build: DEFAULT_BUILD,
            },
        }
    }
}

pub struct CondaFormat;

impl PackageFormat for CondaFormat {
    fn name(&self) -> &'static str {
        "conda"
    }

    fn display_name(&self) -> &'static str {
        "Conda"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        let location = CondaLocation::parse(pkg.qualifier);
        format!(
            "{}/repository/{}/{}/{}/{}-{}-{}.{}",
            base_url,
            repo_name,
            location.channel,
            location.platform,
            pkg.name,
            pkg.version,
            location.build,
            pkg.extension_or(DEFAULT_EXTENSION)
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        let extension = pkg.extension_or(DEFAULT_EXTENSION);
        match pkg.qualifier {
            Some(qualifier) => {
                let parts: Vec<&str> = qualifier.split('/').collect();
                if let [channel, platform, build, ..] = parts.as_slice() {
                    format!(
                        "{}@{} (channel: {}, platform: {}, build: {}, .{})",
                        pkg.name, pkg.version, channel, platform, build, extension
                    )
                } else {
                    format!("{}@{} ({}, .{})", pkg.name, pkg.version, qualifier, extension)
                }
            }
            None => format!("{}@{} (.{})", pkg.name, pkg.version, extension),
        }
    }
}
