//! Nexus Repository Manager REST client.

mod client;
mod model;

pub use client::{filter_proxies, require_proxy, NexusClient};
pub use model::{IqConnection, RepositorySummary};
