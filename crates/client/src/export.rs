//! Exported delegation files and `Content-Disposition` handling.

use std::borrow::Cow;

use reqwest::Response;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

use accessadmin_core::PartyUuid;

use crate::error::ApiResult;

/// A file produced by the backend, ready to be saved client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Save name used when the backend does not provide one.
pub fn default_export_filename(party: &PartyUuid) -> String {
    format!("client-delegations-{party}.csv")
}

/// Filename carried by a `Content-Disposition` header value.
///
/// `filename*=` (RFC 5987) wins over `filename=`. Quotes are removed and only
/// the final path component is kept.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in header.split(';') {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => extended = decode_ext_value(value),
            "filename" => plain = Some(unquote(value).to_string()),
            _ => {}
        }
    }

    extended
        .and_then(|name| last_component(&name))
        .or_else(|| plain.and_then(|name| last_component(&name)))
}

/// Header filename, or the per-party default.
pub fn resolve_filename(header: Option<&str>, party: &PartyUuid) -> String {
    header
        .and_then(filename_from_content_disposition)
        .unwrap_or_else(|| default_export_filename(party))
}

// charset'language'percent-encoded
fn decode_ext_value(value: &str) -> Option<String> {
    let encoded = unquote(value).splitn(3, '\'').nth(2)?;
    urlencoding::decode(encoded).ok().map(Cow::into_owned)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn last_component(name: &str) -> Option<String> {
    let last = name.rsplit(['/', '\\']).next()?.trim();
    match last {
        "" | "." | ".." => None,
        other => Some(other.to_string()),
    }
}

impl ExportedFile {
    pub(crate) async fn from_response(response: Response, party: &PartyUuid) -> ApiResult<Self> {
        let header_value = |name: reqwest::header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let disposition = header_value(CONTENT_DISPOSITION);
        let content_type = header_value(CONTENT_TYPE);
        let filename = resolve_filename(disposition.as_deref(), party);

        let bytes = response.bytes().await?.to_vec();
        tracing::debug!(%filename, bytes = bytes.len(), "received exported file");

        Ok(Self {
            filename,
            content_type,
            bytes,
        })
    }

    /// Write the file into `dir` under its resolved name.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn save_to(&self, dir: impl AsRef<std::path::Path>) -> ApiResult<std::path::PathBuf> {
        let name = last_component(&self.filename).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("unusable file name: {}", self.filename),
            )
        })?;
        let path = dir.as_ref().join(name);

        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "saved exported file");

        Ok(path)
    }

    /// Hand the file to the browser as a download.
    #[cfg(target_arch = "wasm32")]
    pub fn trigger_download(&self) -> ApiResult<()> {
        use wasm_bindgen::JsCast;

        use crate::error::ApiError;

        let js_err = |e: wasm_bindgen::JsValue| ApiError::Browser(format!("{e:?}"));

        let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window object".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ApiError::Browser("no document object".into()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(self.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        if let Some(content_type) = &self.content_type {
            options.set_type(content_type);
        }
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| ApiError::Browser("failed to create anchor element".into()))?;
        anchor.set_href(&url);
        anchor.set_download(&self.filename);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
}
