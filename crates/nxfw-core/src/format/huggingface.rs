//! HuggingFace model repositories.

use super::PackageFormat;
use crate::package::{Package, PolicyName};

const DEFAULT_BRANCH: &str = "main";

static PACKAGES: &[Package] = &[
    // Legal
    Package::new(
        "OuteAI/OuteTTS-0.2-500M-GGUF",
        "ee3de04a4d6ca4b41d7f2598734636c08c82c713",
        PolicyName::LicenseBanned,
    )
    .with_qualifier("ee3de04a4d6ca4b41d7f2598734636c08c82c713:OuteTTS-0.2-500M-FP16.gguf"),
];

/// Split a `branch:filename` qualifier. A qualifier without exactly one `:`
/// is a bare filename on the default branch.
fn split_qualifier(qualifier: &str) -> (&str, &str) {
    let parts: Vec<&str> = qualifier.split(':').collect();
    match parts.as_slice() {
        [branch, filename] => (*branch, *filename),
        _ => (DEFAULT_BRANCH, qualifier),
    }
}

pub struct HuggingFaceFormat;

impl PackageFormat for HuggingFaceFormat {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn display_name(&self) -> &'static str {
        "HuggingFace"
    }

    fn packages(&self) -> &'static [Package] {
        PACKAGES
    }

    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String {
        let (branch, filename) = match pkg.qualifier {
            Some(qualifier) => split_qualifier(qualifier),
            None => (DEFAULT_BRANCH, pkg.extension.unwrap_or_default()),
        };

        format!(
            "{}/repository/{}/{}/resolve/{}/{}",
            base_url, repo_name, pkg.name, branch, filename
        )
    }

    fn format_label(&self, pkg: &Package) -> String {
        match pkg.qualifier {
            Some(qualifier) => {
                let (_, filename) = split_qualifier(qualifier);
                format!("{}@{} (file: {})", pkg.name, pkg.version, filename)
            }
            None => pkg.coordinates(),
        }
    }
}
