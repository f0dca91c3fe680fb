//! Basic authentication credentials for Nexus Repository and IQ Server.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::error::{CheckError, Result};

pub const ENV_NEXUS_USERNAME: &str = "NEXUS_USERNAME";
pub const ENV_NEXUS_PASSWORD: &str = "NEXUS_PASSWORD";
pub const ENV_NEXUS_URL: &str = "NEXUS_URL";
pub const ENV_NXIQ_USERNAME: &str = "NXIQ_USERNAME";
pub const ENV_NXIQ_PASSWORD: &str = "NXIQ_PASSWORD";
pub const ENV_NXIQ_URL: &str = "NXIQ_URL";

/// Variable lookup, so credential loading can be exercised without touching
/// the process environment.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// HTTP Basic authentication credentials
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpBasicCredentials {
    pub username: String,
    pub password: String,
}

impl HttpBasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read a username/password pair. Both variables must be set and non-empty.
    pub fn from_lookup(lookup: EnvLookup<'_>, user_var: &str, pass_var: &str) -> Option<Self> {
        let username = lookup(user_var).filter(|s| !s.is_empty())?;
        let password = lookup(pass_var).filter(|s| !s.is_empty())?;
        Some(Self { username, password })
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for HttpBasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Credentials for both servers the tester talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub nexus: HttpBasicCredentials,
    pub iq: HttpBasicCredentials,
}

impl AuthConfig {
    /// Load credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|name: &str| env::var(name).ok())
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let nexus = HttpBasicCredentials::from_lookup(lookup, ENV_NEXUS_USERNAME, ENV_NEXUS_PASSWORD)
            .ok_or_else(|| {
                CheckError::MissingCredentials(format!(
                    "{} and {}",
                    ENV_NEXUS_USERNAME, ENV_NEXUS_PASSWORD
                ))
            })?;

        let iq = match HttpBasicCredentials::from_lookup(lookup, ENV_NXIQ_USERNAME, ENV_NXIQ_PASSWORD) {
            Some(creds) => creds,
            None => {
                log::debug!(
                    "{} not set, using Nexus Repository credentials for IQ Server",
                    ENV_NXIQ_USERNAME
                );
                nexus.clone()
            }
        };

        Ok(Self { nexus, iq })
    }
}
