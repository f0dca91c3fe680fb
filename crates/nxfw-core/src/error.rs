use thiserror::Error;

use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum CheckError {
    // Format errors
    #[error("Unknown package format: {0}")]
    UnknownFormat(String),

    #[error("Malformed {format} package name: {name}")]
    MalformedPackageName { format: String, name: String },

    #[error("Malformed {format} coordinates: missing `{field}`")]
    MalformedCoordinates { format: String, field: &'static str },

    // Network errors
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Unexpected HTTP {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    JsonParse(String),

    // Repository manager errors
    #[error("No {format} proxy repositories found")]
    NoProxyRepositories { format: String },

    #[error("{name} is not a {format} proxy repository")]
    NotAProxyRepository { name: String, format: String },

    #[error("Nexus Repository is not connected to Repository Firewall")]
    FirewallNotConfigured,

    // Config errors
    #[error("Missing credentials: {0} must be set")]
    MissingCredentials(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<HttpError> for CheckError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::HttpStatus { status, url } => CheckError::UnexpectedStatus { status, url },
            HttpError::JsonParse(msg) => CheckError::JsonParse(msg),
            other => CheckError::TransportFailure(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
