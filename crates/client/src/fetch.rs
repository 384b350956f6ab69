//! Transport abstraction
//!
//! [`Fetcher`] performs a single GET and hands back the raw response.
//! [`HttpFetcher`] is the default, backed by `reqwest`; tests and
//! embedders inject their own.

use async_trait::async_trait;
use tdpsearch_common::errors::Result;

/// Value of the content-type header sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Raw response as seen by the request helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Per-request options supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// JSON content type first, caller headers merged over it.
    /// Header names compare case-insensitively; a later value wins.
    pub fn with_defaults(&self) -> Self {
        let mut headers = vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())];

        for (name, value) in &self.headers {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                Some(slot) => slot.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }

        Self { headers }
    }
}

/// Performs GET requests for the API client
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, options: &RequestOptions) -> Result<FetchResponse>;
}

/// Default fetcher backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pool, proxy settings, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, options: &RequestOptions) -> Result<FetchResponse> {
        let mut request = self.client.get(url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(FetchResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_include_json_content_type() {
        let options = RequestOptions::new().with_defaults();
        assert_eq!(
            options.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_caller_headers_merge_over_defaults() {
        let options = RequestOptions::new()
            .header("content-type", "text/plain")
            .header("X-Request-ID", "abc")
            .with_defaults();

        assert_eq!(options.headers.len(), 2);
        assert_eq!(options.headers[0], ("Content-Type".to_string(), "text/plain".to_string()));
        assert_eq!(options.headers[1], ("X-Request-ID".to_string(), "abc".to_string()));
    }

    #[test]
    fn test_success_range() {
        let mut response = FetchResponse {
            status: 204,
            status_text: "No Content".into(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 302;
        assert!(!response.is_success());
    }
}
