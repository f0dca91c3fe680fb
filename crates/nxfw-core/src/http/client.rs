//! HTTP client for repository manager and firewall operations.
//!
//! A thin wrapper around `reqwest` that adds:
//! - HTTP Basic authentication on every request
//! - An explicit request and connect timeout
//! - A custom User-Agent
//! - Optional proxy support
//!
//! Requests are never retried. A probe is a single GET whose status code is
//! the answer, so a retry would only hide what the firewall decided.
//!
//! # Examples
//!
//! ```no_run
//! use nxfw_core::http::{HttpClient, HttpClientConfig};
//! use nxfw_core::HttpBasicCredentials;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::new()
//!     .with_timeout(Duration::from_secs(60))
//!     .with_credentials(HttpBasicCredentials::new("admin", "admin123"));
//!
//! let client = HttpClient::with_config(config)?;
//! let status = client
//!     .get_status("https://nexus.example.com/repository/npm-proxy/bson/-/bson-1.0.9.tgz")
//!     .await?;
//! println!("HTTP {}", status);
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::HttpBasicCredentials;

const DEFAULT_USER_AGENT: &str = concat!("nxfw-policy-tester/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("JSON deserialization error: {0}")]
    JsonParse(String),
}

pub struct HttpClient {
    client: Client,
    user_agent: String,
    timeout: Duration,
    credentials: Option<HttpBasicCredentials>,
}

impl HttpClient {
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self, HttpError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent,
            timeout: config.timeout,
            credentials: config.credentials,
        })
    }

    /// Replace the credentials sent with every request
    pub fn with_credentials(mut self, credentials: HttpBasicCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Perform a single GET and return the response status.
    ///
    /// The body is dropped unread. Any status, including 4xx and 5xx, is a
    /// successful return; only transport failures are errors.
    pub async fn get_status(&self, url: &str) -> Result<u16, HttpError> {
        log::trace!("GET {}", url);
        let response = self.request(url).send().await?;
        let status = response.status().as_u16();
        log::debug!("HTTP {} from {}", status, url);
        Ok(status)
    }

    /// GET JSON and deserialize. Non-2xx statuses become `HttpError::HttpStatus`.
    pub async fn get_json<T, Q>(&self, url: &str, query: &Q) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        log::trace!("GET {} (json)", url);
        let response = self
            .request(url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| HttpError::JsonParse(e.to_string()))
    }

    fn request(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.credentials {
            Some(creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub proxy: Option<String>,
    pub user_agent: String,
    pub credentials: Option<HttpBasicCredentials>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            credentials: None,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_credentials(mut self, credentials: HttpBasicCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}
