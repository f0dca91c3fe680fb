//! Credentials and connection settings.
//!
//! Credentials are read from the environment:
//!
//! - `NEXUS_USERNAME` / `NEXUS_PASSWORD`: Nexus Repository (required)
//! - `NXIQ_USERNAME` / `NXIQ_PASSWORD`: Sonatype IQ Server (optional, falls
//!   back to the Nexus Repository credentials)
//!
//! Server URLs may come from `NEXUS_URL` and `NXIQ_URL`. When no IQ URL is
//! given anywhere, it is discovered from the Nexus Repository firewall
//! configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use nxfw_core::config::AuthConfig;
//!
//! let auth = AuthConfig::from_env().unwrap();
//! println!("Nexus user: {}", auth.nexus.username);
//! ```

mod auth;

pub use auth::{
    AuthConfig, EnvLookup, HttpBasicCredentials, ENV_NEXUS_PASSWORD, ENV_NEXUS_URL,
    ENV_NEXUS_USERNAME, ENV_NXIQ_PASSWORD, ENV_NXIQ_URL, ENV_NXIQ_USERNAME,
};
