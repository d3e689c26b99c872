//! Client error model.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401 from any endpoint. Callers typically redirect to login.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Any other non-2xx status.
    #[error("request failed with status {status}{}", fmt_body(.body))]
    RequestFailed { status: u16, body: Option<String> },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Writing an exported file to disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Handing an exported file to the browser failed.
    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// HTTP status for status-derived errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthenticated => Some(401),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn fmt_body(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(": {body}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_includes_body_when_present() {
        let err = ApiError::RequestFailed {
            status: 500,
            body: Some("boom".to_string()),
        };
        assert_eq!(err.to_string(), "request failed with status 500: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn request_failed_without_body() {
        let err = ApiError::RequestFailed { status: 404, body: None };
        assert_eq!(err.to_string(), "request failed with status 404");
    }

    #[test]
    fn unauthenticated_reports_401() {
        let err = ApiError::Unauthenticated;
        assert!(err.is_unauthenticated());
        assert_eq!(err.status(), Some(401));
    }
}
