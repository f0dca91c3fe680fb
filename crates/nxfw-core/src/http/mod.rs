//! HTTP transport shared by the prober and the REST clients.

mod client;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::{HttpClient, HttpClientConfig, HttpError};
