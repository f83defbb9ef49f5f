//! API utilities for frontend-backend communication
//!
//! `ApiClient` builds URLs against the configured base and attaches session
//! credentials to every request: browser cookies (`credentials: include`)
//! and a bearer token when one is stored.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Build a full API URL from a path starting with "/api/"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.credentials(RequestCredentials::Include);
        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send_put(path, body).await?;
        decode_json(response).await
    }

    /// PUT where only the status matters; the response body is ignored
    pub async fn put_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self.send_put(path, body).await?;
        ensure_ok(&response)
    }

    async fn send_put<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        self.authorize(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(&response)?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = ApiClient::new("http://localhost:3000/");
        assert_eq!(api.url("/api/tenders/5"), "http://localhost:3000/api/tenders/5");
    }

    #[test]
    fn test_empty_base_keeps_path_relative() {
        assert_eq!(ApiClient::new("").url("/api/profile"), "/api/profile");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server responded with status 500"
        );
        assert_eq!(
            ApiError::Decode("eof".to_string()).to_string(),
            "failed to parse response: eof"
        );
    }
}
