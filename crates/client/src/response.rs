//! Response inspection shared by every endpoint wrapper.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Classified outcome of a backend response.
#[derive(Debug)]
pub enum ResponseOutcome<T = Response> {
    Success(T),
    /// HTTP 401.
    Unauthenticated,
    /// Any other non-2xx status; `body` is `None` when the body was empty or
    /// unreadable.
    Failed { status: StatusCode, body: Option<String> },
}

impl ResponseOutcome<Response> {
    /// Classify a response by status. Failure bodies are read as text.
    pub async fn inspect(response: Response) -> Self {
        let status = response.status();
        if status.is_success() {
            return Self::Success(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Self::Unauthenticated;
        }
        let body = response.text().await.ok();
        Self::failed(status, body)
    }
}

impl<T> ResponseOutcome<T> {
    pub fn failed(status: StatusCode, body: Option<String>) -> Self {
        Self::Failed {
            status,
            body: body.filter(|b| !b.trim().is_empty()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_result(self) -> ApiResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Unauthenticated => Err(ApiError::Unauthenticated),
            Self::Failed { status, body } => Err(ApiError::RequestFailed {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

/// Decode a successful response body as JSON.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_maps_to_dedicated_error() {
        let err = ResponseOutcome::<()>::Unauthenticated.into_result().unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn failure_keeps_status_and_body() {
        let outcome = ResponseOutcome::<()>::failed(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("boom".to_string()),
        );
        match outcome.into_result().unwrap_err() {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.as_deref(), Some("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_failure_body_is_dropped() {
        let outcome = ResponseOutcome::<()>::failed(StatusCode::BAD_GATEWAY, Some("  ".to_string()));
        match outcome {
            ResponseOutcome::Failed { body, .. } => assert!(body.is_none()),
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn success_passes_value_through() {
        let outcome = ResponseOutcome::Success(7);
        assert!(outcome.is_success());
        assert_eq!(outcome.into_result().unwrap(), 7);
    }
}
