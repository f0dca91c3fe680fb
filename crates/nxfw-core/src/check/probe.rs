use async_trait::async_trait;

use crate::http::{HttpClient, HttpError};

/// Performs the download probe for a package URL.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Single GET, returning the raw HTTP status
    async fn probe(&self, url: &str) -> Result<u16, HttpError>;
}

#[async_trait]
impl Prober for HttpClient {
    async fn probe(&self, url: &str) -> Result<u16, HttpError> {
        self.get_status(url).await
    }
}

/// Classification of a probe status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Available,
    Blocked,
    Unavailable(u16),
}

impl ProbeStatus {
    pub fn classify(status: u16) -> Self {
        match status {
            200 => ProbeStatus::Available,
            403 => ProbeStatus::Blocked,
            other => ProbeStatus::Unavailable(other),
        }
    }
}
