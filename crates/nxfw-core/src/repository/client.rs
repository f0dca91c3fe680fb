use std::sync::Arc;
use url::Url;

use super::model::{IqConnection, RepositorySummary};
use crate::error::{CheckError, Result};
use crate::http::HttpClient;

const REST_PATH: &str = "/service/rest";
const NO_QUERY: [(&str, &str); 0] = [];

pub struct NexusClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl NexusClient {
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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host of the repository manager, as used in Docker labels
    pub fn repo_host(&self) -> Result<String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| CheckError::Config(format!("invalid Nexus URL {}: {}", self.base_url, e)))?;
        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| CheckError::Config(format!("Nexus URL {} has no host", self.base_url)))
    }

    pub async fn validate_connection(&self) -> Result<()> {
        let url = self.endpoint("/v1/status");
        let status = self.http.get_status(&url).await?;
        if status != 200 {
            return Err(CheckError::UnexpectedStatus { status, url });
        }
        log::info!("Connected to Nexus at {}", self.base_url);
        Ok(())
    }

    pub async fn repositories(&self) -> Result<Vec<RepositorySummary>> {
        let repos: Vec<RepositorySummary> =
            self.http.get_json(&self.endpoint("/v1/repositories"), &NO_QUERY).await?;
        log::debug!("{} repositories on {}", repos.len(), self.base_url);
        Ok(repos)
    }

    /// Proxy repositories of the given format.
    ///
    /// An empty result is `NoProxyRepositories`.
    pub async fn proxy_repositories(&self, format: &str) -> Result<Vec<RepositorySummary>> {
        let proxies = filter_proxies(self.repositories().await?, format);
        if proxies.is_empty() {
            return Err(CheckError::NoProxyRepositories {
                format: format.to_string(),
            });
        }
        Ok(proxies)
    }

    /// The named proxy repository of the given format.
    ///
    /// Hosted and group repositories, or proxies of another format, are
    /// `NotAProxyRepository`.
    pub async fn proxy_repository(&self, format: &str, name: &str) -> Result<RepositorySummary> {
        require_proxy(self.repositories().await?, format, name)
    }

    pub async fn firewall_configuration(&self) -> Result<IqConnection> {
        Ok(self.http.get_json(&self.endpoint("/v1/iq"), &NO_QUERY).await?)
    }

    /// URL of the firewall server the repository manager is connected to
    pub async fn connected_iq_url(&self) -> Result<String> {
        let iq = self.firewall_configuration().await?;
        match iq.url {
            Some(url) if iq.enabled && !url.is_empty() => Ok(url.trim_end_matches('/').to_string()),
            _ => Err(CheckError::FirewallNotConfigured),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, REST_PATH, path)
    }
}

pub fn filter_proxies(repos: Vec<RepositorySummary>, format: &str) -> Vec<RepositorySummary> {
    repos.into_iter().filter(|r| r.is_proxy_for(format)).collect()
}

pub fn require_proxy(
    repos: Vec<RepositorySummary>,
    format: &str,
    name: &str,
) -> Result<RepositorySummary> {
    filter_proxies(repos, format)
        .into_iter()
        .find(|r| r.name == name)
        .ok_or_else(|| CheckError::NotAProxyRepository {
            name: name.to_string(),
            format: format.to_string(),
        })
}
