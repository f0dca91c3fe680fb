use anyhow::{bail, Context, Result};
use nxfw_core::config::EnvLookup;
use nxfw_core::HttpClientConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "nxfw.toml";

/// The tester configuration file structure (nxfw.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NxfwConfig {
    /// Nexus Repository connection
    pub nexus: ServerConfig,

    /// IQ Server connection
    pub iq: ServerConfig,

    /// HTTP transport settings
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: Option<u64>,

    pub connect_timeout_secs: Option<u64>,

    pub user_agent: Option<String>,

    /// Proxy URL for outgoing requests
    pub proxy: Option<String>,
}

impl NxfwConfig {
    /// Load configuration from nxfw.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: NxfwConfig = toml::from_str(&content)
                    .with_context(|| format!("Invalid {}", config_path.display()))?;
                log::debug!("Loaded configuration from {}", config_path.display());
                return Ok(Some((config_path, config)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<(PathBuf, Self)>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// HTTP client settings, file values over built-in defaults
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::new();
        if let Some(secs) = self.http.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.http.connect_timeout_secs {
            config = config.with_connect_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &self.http.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(proxy) = &self.http.proxy {
            config = config.with_proxy(proxy.clone());
        }
        config
    }
}

/// Pick a setting: command line, then environment, then config file.
pub fn resolve(
    flag: Option<&str>,
    lookup: EnvLookup<'_>,
    env_var: &str,
    file: Option<&str>,
) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| lookup(env_var).filter(|v| !v.trim().is_empty()))
        .or_else(|| file.map(str::to_string))
}

/// Validate a server URL and strip trailing slashes.
pub fn normalize_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!("Invalid URL '{}': URL must start with http:// or https://", url);
    }
    Ok(url.to_string())
}
