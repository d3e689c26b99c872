//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Language sent as `Accept-Language` to the metadata catalog unless
/// overridden.
pub const DEFAULT_LANGUAGE: &str = "nb";

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Connection settings for [`crate::AccessClient`].
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://am.example.org`. Paths such as
    /// `/api/metadata` are appended to it.
    pub base_url: String,
    /// Bearer token. Browser builds usually rely on cookies and leave this unset.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            language: default_language(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Build from `ACCESSADMIN_API_URL`, `ACCESSADMIN_TOKEN` and
    /// `ACCESSADMIN_LANGUAGE`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("ACCESSADMIN_API_URL").unwrap_or_else(|_| {
            tracing::warn!("ACCESSADMIN_API_URL not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        let token = std::env::var("ACCESSADMIN_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        let language = std::env::var("ACCESSADMIN_LANGUAGE")
            .ok()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(default_language);

        Self {
            base_url,
            token,
            language,
        }
    }

    /// Base URL without trailing slashes, validated to be http(s).
    pub(crate) fn normalized_base_url(&self) -> ApiResult<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::config("base_url is empty"));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::config(format!(
                "base_url must start with http:// or https://, got {trimmed}"
            )));
        }
        Ok(trimmed.to_string())
    }
}

impl core::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("language", &self.language)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("https://am.example.org//");
        assert_eq!(config.normalized_base_url().unwrap(), "https://am.example.org");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let err = ClientConfig::new("ftp://example.org").normalized_base_url().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = ClientConfig::new("  ").normalized_base_url().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn language_defaults_to_nb() {
        assert_eq!(ClientConfig::new("http://x").language, "nb");

        let parsed: ClientConfig = serde_json::from_str(r#"{ "base_url": "http://x" }"#).unwrap();
        assert_eq!(parsed.language, "nb");
        assert!(parsed.token.is_none());
    }

    #[test]
    fn debug_redacts_token() {
        let config = ClientConfig::new("http://x").with_token("secret-token");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
