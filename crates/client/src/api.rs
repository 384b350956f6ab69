//! Search backend endpoints
//!
//! Every method is a GET against the configured API root. Failures are
//! returned unchanged; there is no retry.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::{form_urlencoded, Url};

use tdpsearch_common::{
    config::ApiConfig,
    errors::{AppError, Result},
    metrics::{endpoint_label, RequestMetrics},
    models::{League, Paper, PaperId, SearchParams, SearchResult, TdpName, TeamName},
};

use crate::fetch::{Fetcher, HttpFetcher, RequestOptions};

/// Client for the search backend
#[derive(Clone)]
pub struct ApiClient {
    root: String,
    fetcher: Arc<dyn Fetcher>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("root", &self.root).finish()
    }
}

impl ApiClient {
    /// Client using the default HTTP transport
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_fetcher(config.root(), Arc::new(HttpFetcher::new()))
    }

    /// Client using a caller-supplied transport
    pub fn with_fetcher(root: impl Into<String>, fetcher: Arc<dyn Fetcher>) -> Self {
        let root: String = root.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Request helper shared by all endpoints.
    ///
    /// `endpoint` is the path (and query) below the API root. A non-2xx
    /// status fails with [`AppError::Http`]; a success body is decoded
    /// after removing the `data` envelope, if any.
    pub async fn fetch_api<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let url = Url::parse(&format!("{}{}", self.root, endpoint))?;
        let options = options.cloned().unwrap_or_default().with_defaults();

        tracing::debug!(url = %url, "API request");
        let metrics = RequestMetrics::start(endpoint_label(endpoint));

        let response = match self.fetcher.fetch(url.as_str(), &options).await {
            Ok(response) => response,
            Err(e) => {
                metrics.finish(0);
                tracing::warn!(url = %url, error = %e, "API request failed");
                return Err(e);
            }
        };
        metrics.finish(response.status);

        if !response.is_success() {
            tracing::warn!(
                url = %url,
                status = response.status,
                status_text = %response.status_text,
                "API returned error status"
            );
            return Err(AppError::Http {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let body: Value = serde_json::from_str(&response.body)?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    /// Search for paper chunks. `GET /search`
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResult> {
        let mut query = vec![("query", params.query.clone())];

        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        push_non_empty(&mut query, "league_filter", params.league_filter.as_deref());
        push_non_empty(&mut query, "year_filter", params.year_filter.as_deref());
        push_non_empty(&mut query, "team_filter", params.team_filter.as_deref());
        push_non_empty(&mut query, "lyti_filter", params.lyti_filter.as_deref());
        query.push(("search_type", params.effective_search_type().to_string()));

        self.fetch_api(&with_query("/search", &query), None).await
    }

    /// List all available papers. `GET /papers`
    pub async fn list_papers(&self) -> Result<Vec<TdpName>> {
        self.fetch_api("/papers", None).await
    }

    /// Markdown of one paper. `GET /papers/{league__year__team__index}`
    pub async fn get_paper(
        &self,
        league: &str,
        year: u32,
        team: &str,
        index: Option<u32>,
    ) -> Result<Paper> {
        let id = PaperId::new(league, year, team, index);
        self.fetch_api(&format!("/papers/{}", id), None).await
    }

    /// Markdown of one paper by query parameters. `GET /paper`
    pub async fn get_paper_by_params(&self, league: &str, year: u32, team: &str) -> Result<Paper> {
        let query = [
            ("league", league.to_string()),
            ("year", year.to_string()),
            ("team", team.to_string()),
        ];
        self.fetch_api(&with_query("/paper", &query), None).await
    }

    /// List teams, optionally narrowed by a hint matched server-side. `GET /teams`
    pub async fn list_teams(&self, hint: Option<&str>) -> Result<Vec<TeamName>> {
        let mut query = Vec::new();
        push_non_empty(&mut query, "hint", hint);
        self.fetch_api(&with_query("/teams", &query), None).await
    }

    /// `GET /leagues`
    pub async fn list_leagues(&self) -> Result<Vec<League>> {
        self.fetch_api("/leagues", None).await
    }

    /// `GET /years`
    pub async fn list_years(&self) -> Result<Vec<u32>> {
        self.fetch_api("/years", None).await
    }
}

/// Return the `data` field of an enveloped body, or the body itself.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

fn push_non_empty(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        query.push((key, value.to_string()));
    }
}

fn with_query(path: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    format!("{}?{}", path, encoded)
}
