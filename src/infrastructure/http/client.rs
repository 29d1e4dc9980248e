use crate::common::response::{ApiResponse, ServiceError};
use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Shared HTTP client for the catalog API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        info!("✅ Catalog API at {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Starts a request, attaching the bearer token when one is given.
    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Unwraps the `{status, message, data}` envelope of a response.
    pub async fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Error bodies are usually envelopes too; fall back to the raw text.
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                .map(|envelope| envelope.message)
                .unwrap_or(body);

            return Err(ServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let api = ApiClient::new("http://localhost:3000/api/v1/", 5).unwrap();
        assert_eq!(api.endpoint("/movies/3"), "http://localhost:3000/api/v1/movies/3");

        let api = ApiClient::new("http://localhost:3000/api/v1", 5).unwrap();
        assert_eq!(api.endpoint("movies/3"), "http://localhost:3000/api/v1/movies/3");
    }

    #[test]
    fn rejects_malformed_base_url() {
        assert!(ApiClient::new("not a url", 5).is_err());
    }
}
