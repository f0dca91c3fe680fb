//! Quarantine listing payloads.

use serde::Deserialize;
use std::collections::HashMap;

/// Response of the quarantined components report
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarantineList {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Vec<QuarantinedComponent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarantinedComponent {
    pub component_identifier: ComponentIdentifier,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub quarantined: bool,
    #[serde(default)]
    pub policy_name: Option<String>,
    #[serde(default)]
    pub threat_level: Option<u32>,
}

/// Format plus the format-specific coordinate fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentIdentifier {
    pub format: String,
    #[serde(default)]
    pub coordinates: HashMap<String, String>,
}
