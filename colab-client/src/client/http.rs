// colab-client/src/client/http.rs
// HTTP transport for the collaborators API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};
use serde::Serialize;

/// Raw response: status plus the body text, read before anything is trusted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP transport trait
///
/// Every call carries `Authorization: Bearer <token>` and
/// `Content-Type: application/json`. Non-2xx statuses are returned as
/// responses, not errors; `Err` means no response was received at all.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str, bearer: &str) -> ClientResult<HttpResponse>;
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        bearer: &str,
        body: &B,
    ) -> ClientResult<HttpResponse>;
    async fn put<B: Serialize + Sync>(
        &self,
        path: &str,
        bearer: &str,
        body: &B,
    ) -> ClientResult<HttpResponse>;
    async fn delete(&self, path: &str, bearer: &str) -> ClientResult<HttpResponse>;
}

/// reqwest-backed HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    config: ClientConfig,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "base URL must be http(s): {}",
                config.base_url
            )));
        }
        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn request(&self, method: Method, path: &str, bearer: &str) -> reqwest::RequestBuilder {
        let url = self.config.url_for(path);
        tracing::debug!(%method, %url, token_present = !bearer.is_empty(), "Sending request");
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
            .header(header::CONTENT_TYPE, "application/json")
    }

    async fn read(response: reqwest::Response) -> ClientResult<HttpResponse> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), body_len = body.len(), "Response received");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get(&self, path: &str, bearer: &str) -> ClientResult<HttpResponse> {
        let response = self.request(Method::GET, path, bearer).send().await?;
        Self::read(response).await
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        bearer: &str,
        body: &B,
    ) -> ClientResult<HttpResponse> {
        let response = self
            .request(Method::POST, path, bearer)
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn put<B: Serialize + Sync>(
        &self,
        path: &str,
        bearer: &str,
        body: &B,
    ) -> ClientResult<HttpResponse> {
        let response = self
            .request(Method::PUT, path, bearer)
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn delete(&self, path: &str, bearer: &str) -> ClientResult<HttpResponse> {
        let response = self.request(Method::DELETE, path, bearer).send().await?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success() {
        assert!(HttpResponse::new(StatusCode::NO_CONTENT, "").is_success());
        assert!(!HttpResponse::new(StatusCode::FORBIDDEN, "{}").is_success());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = NetworkHttpClient::new(&ClientConfig::new("ftp://example.com")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_builds_with_timeout() {
        let config = ClientConfig::new("http://localhost:3000")
            .with_timeout(std::time::Duration::from_secs(2));
        let client = NetworkHttpClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
