//! A single package to test.

use serde::Serialize;

use super::PolicyName;

/// One entry of a format catalog.
///
/// `name` and `version` are opaque, format-specific strings (Maven names are
/// `group/artifact`, Docker versions are tags). `qualifier` carries whatever
/// extra identity the format needs: a PyPI wheel tag, a Conda
/// `channel/platform/build`, or a HuggingFace `branch:filename`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
    pub policy: PolicyName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<&'static str>,
}

impl Package {
    pub const fn new(name: &'static str, version: &'static str, policy: PolicyName) -> Self {
        Self {
            name,
            version,
            policy,
            extension: None,
            qualifier: None,
        }
    }

    pub const fn with_extension(self, extension: &'static str) -> Self {
        Self {
            extension: Some(extension),
            ..self
        }
    }

    pub const fn with_qualifier(self, qualifier: &'static str) -> Self {
        Self {
            qualifier: Some(qualifier),
            ..self
        }
    }

    /// File extension, or the format's default when the entry has none
    pub fn extension_or(&self, default: &'static str) -> &'static str {
        self.extension.unwrap_or(default)
    }

    /// `name@version`
    pub fn coordinates(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
