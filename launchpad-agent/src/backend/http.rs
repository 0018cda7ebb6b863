//! JSON-over-HTTPS plumbing shared by the hosted backends.

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::traits::LlmError;

/// How a backend presents its API key.
#[derive(Debug, Clone, Copy)]
pub(crate) enum KeyStyle {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// Key sent verbatim in the named header
    Header(&'static str),
}

/// A base URL plus a client carrying the JSON and auth headers.
#[derive(Debug, Clone)]
pub(crate) struct JsonApi {
    client: Client,
    base_url: String,
}

impl JsonApi {
    pub(crate) fn new(base_url: impl Into<String>, api_key: Option<&str>, style: KeyStyle) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = api_key {
            let (name, value) = match style {
                KeyStyle::Bearer => (header::AUTHORIZATION, format!("Bearer {}", key)),
                KeyStyle::Header(name) => (HeaderName::from_static(name), key.to_string()),
            };
            let mut value = HeaderValue::from_str(&value)
                .map_err(|_| LlmError::InvalidConfig("API key is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LlmError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and report whether it answered 2xx.
    pub(crate) async fn reachable(&self, path: &str) -> bool {
        match self.client.get(self.url(path)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Backend probe failed");
                false
            }
        }
    }

    /// POST `body` to `path` and decode the JSON reply.
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, LlmError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))
    }
}

async fn status_error(status: StatusCode, response: Response) -> LlmError {
    let retry_after_ms = response
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(|secs| secs * 1000);
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited { retry_after_ms },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::Unavailable(format!("HTTP {}: {}", status, body))
        }
        _ => LlmError::RequestFailed(format!("HTTP {}: {}", status, body)),
    }
}
