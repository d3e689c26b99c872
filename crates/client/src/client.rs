//! Shared transport used by every endpoint group.

use reqwest::header::HeaderValue;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::{ClientAdminApi, ConnectionsApi, MetadataApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::query::QueryParams;
use crate::response::{self, ResponseOutcome};

/// Handle to the access-management backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct AccessClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    language: String,
}

impl AccessClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Self::with_http_client(config, http)
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS, ...).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> ApiResult<Self> {
        let base_url = config.normalized_base_url()?;
        if let Some(token) = &config.token {
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::config("token is not a valid header value"))?;
        }
        HeaderValue::from_str(&config.language)
            .map_err(|_| ApiError::config(format!("invalid language: {:?}", config.language)))?;
        tracing::debug!(%base_url, language = %config.language, "access client configured");

        Ok(Self {
            http,
            base_url,
            token: config.token,
            language: config.language,
        })
    }

    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default `Accept-Language` for metadata calls.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn client_admin(&self) -> ClientAdminApi<'_> {
        ClientAdminApi::new(self)
    }

    pub fn connections(&self) -> ConnectionsApi<'_> {
        ConnectionsApi::new(self)
    }

    pub fn metadata(&self) -> MetadataApi<'_> {
        MetadataApi::new(self)
    }

    pub(crate) fn request(&self, method: Method, path: &str, query: &QueryParams) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, url);

        if !query.is_empty() {
            req = req.query(query.pairs());
        }
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send a request and classify the response.
    ///
    /// Only 2xx responses are returned; 401 and other statuses become errors.
    /// A request that cannot be built (bad header or URL) is a config error.
    pub(crate) async fn execute(&self, req: RequestBuilder) -> ApiResult<Response> {
        let request = req
            .build()
            .map_err(|e| ApiError::config(format!("invalid request: {e}")))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(%method, %path, "sending request");
        let response = self.http.execute(request).await?;

        let outcome = ResponseOutcome::inspect(response).await;
        match &outcome {
            ResponseOutcome::Success(resp) => {
                tracing::debug!(%method, %path, status = resp.status().as_u16(), "request succeeded");
            }
            ResponseOutcome::Unauthenticated => {
                tracing::info!(%method, %path, "request unauthenticated");
            }
            ResponseOutcome::Failed { status, .. } => {
                tracing::warn!(%method, %path, status = status.as_u16(), "request failed");
            }
        }

        outcome.into_result()
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = self.execute(req).await?;
        response::decode_json(response).await
    }

    /// For endpoints that answer with an empty 2xx body.
    pub(crate) async fn send_unit(&self, req: RequestBuilder) -> ApiResult<()> {
        self.execute(req).await?;
        Ok(())
    }
}

impl core::fmt::Debug for AccessClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .field("language", &self.language)
            .finish()
    }
}
