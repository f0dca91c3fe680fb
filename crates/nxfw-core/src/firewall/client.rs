//! IQ Server client.

use async_trait::async_trait;
use std::sync::Arc;

use super::model::{QuarantineList, QuarantinedComponent};
use crate::error::{CheckError, Result};
use crate::http::HttpClient;

const TOKEN_PATH: &str = "/api/v2/userTokens/currentUser/hasToken";
const QUARANTINE_PATH: &str = "/api/v2/reports/components/quarantined";

/// Source of quarantine listings.
///
/// Implemented by [`FirewallClient`]; tests substitute in-memory listings.
#[async_trait]
pub trait QuarantineSource: Send + Sync {
    /// Quarantined components filtered by component name and repository public id
    async fn quarantine_list(
        &self,
        component_name: &str,
        repository_public_id: &str,
    ) -> Result<Vec<QuarantinedComponent>>;
}

pub struct FirewallClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl FirewallClient {
    pub fn new(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Create a client and validate the connection in one step
    pub async fn connect(http: Arc<HttpClient>, base_url: impl Into<String>) -> Result<Self> {
        let client = Self::new(http, base_url);
        client.validate_connection().await?;
        Ok(client)
    }

    /// Check that the server is reachable and accepts the credentials.
    pub async fn validate_connection(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        let status = self.http.get_status(&url).await?;
        if status != 200 {
            return Err(CheckError::UnexpectedStatus { status, url });
        }
        log::info!("Connected to firewall server at {}", self.base_url);
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QuarantineSource for FirewallClient {
    async fn quarantine_list(
        &self,
        component_name: &str,
        repository_public_id: &str,
    ) -> Result<Vec<QuarantinedComponent>> {
        let url = format!("{}{}", self.base_url, QUARANTINE_PATH);
        let query = [
            ("componentName", component_name),
            ("repositoryPublicId", repository_public_id),
        ];

        let list: QuarantineList = self.http.get_json(&url, &query).await?;
        log::debug!(
            "{} quarantine entries for {} in {}",
            list.results.len(),
            component_name,
            repository_public_id
        );
        Ok(list.results)
    }
}
