use serde::{Deserialize, Serialize};

/// Entry of `GET /v1/repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub format: String,
    #[serde(rename = "type")]
    pub repo_type: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl RepositorySummary {
    pub fn is_proxy_for(&self, format: &str) -> bool {
        self.repo_type == "proxy" && self.format == format
    }
}

/// Firewall connection configured on the repository manager
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IqConnection {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub authentication_type: Option<String>,
}
