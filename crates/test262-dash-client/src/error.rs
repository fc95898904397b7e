//! Client error taxonomy

/// Errors fetching a report resource
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {status} for {url}")]
    Http { status: u16, url: String },

    #[error("parse error for {url}: {message}")]
    Parse { url: String, message: String },
}
