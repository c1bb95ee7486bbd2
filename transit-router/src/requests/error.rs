//! Request processing error types.

use crate::catalogue::CatalogueError;
use crate::router::RouterError;

/// Errors from reading a request document or building a network from it.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid request document
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base requests describe an inconsistent network
    #[error("invalid network: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The routing settings are out of range
    #[error("invalid routing settings: {0}")]
    Router(#[from] RouterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RequestError::from(CatalogueError::UnknownStop("Zagorye".into()));
        assert_eq!(err.to_string(), "invalid network: unknown stop: Zagorye");

        let err = RequestError::from(RouterError::InvalidWaitTime(0));
        assert!(err.to_string().starts_with("invalid routing settings:"));

        let err = RequestError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert!(err.to_string().contains("JSON parse error"));
    }
}
