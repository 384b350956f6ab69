//! In-memory transport for loader tests

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tdpsearch_client::{ApiClient, FetchResponse, Fetcher, RequestOptions};
use tdpsearch_common::errors::{AppError, Result};
use url::Url;

pub const TEST_ROOT: &str = "http://backend.test/api";

/// Answers by URL path and records every requested URL
#[derive(Default)]
pub struct StubFetcher {
    routes: Vec<(String, u16, Value)>,
    fail_all: bool,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails as if the backend were unreachable
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn route(mut self, path: &str, status: u16, body: Value) -> Self {
        self.routes.push((path.to_string(), status, body));
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub trait StubClient {
    fn client(&self) -> ApiClient;
}

impl StubClient for Arc<StubFetcher> {
    fn client(&self) -> ApiClient {
        ApiClient::with_fetcher(TEST_ROOT, self.clone())
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str, _options: &RequestOptions) -> Result<FetchResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        if self.fail_all {
            return Err(AppError::Internal {
                message: "connection refused".to_string(),
            });
        }

        let path = Url::parse(url)?.path().to_string();
        let (status, body) = self
            .routes
            .iter()
            .find(|(route, _, _)| *route == path)
            .map(|(_, status, body)| (*status, body.to_string()))
            .unwrap_or((404, json!({ "error": "not found" }).to_string()));

        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Ok(FetchResponse {
            status,
            status_text,
            body,
        })
    }
}

pub fn league_json() -> Value {
    json!({
        "league_major": "soccer",
        "league_minor": "smallsize",
        "league_sub": null,
        "name": "soccer_smallsize",
        "name_pretty": "Soccer SmallSize"
    })
}

pub fn team_json() -> Value {
    json!({ "name": "RoboTeam_Twente", "name_pretty": "RoboTeam Twente" })
}
