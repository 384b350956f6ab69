//! Search results page

use serde::Serialize;
use tdpsearch_client::ApiClient;
use tdpsearch_common::{
    metrics,
    models::{SearchParams, SearchResult},
};
use url::form_urlencoded;

/// Query parameters of the search page URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPageQuery {
    pub q: Option<String>,
    pub league: Option<String>,
    pub year: Option<String>,
    pub team: Option<String>,
}

impl SearchPageQuery {
    /// Read `q`, `league`, `year` and `team` from the query string of a
    /// navigation URL. The first occurrence of a repeated key wins and
    /// unknown keys are ignored, so this never fails.
    pub fn from_query(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let slot = match &*key {
                "q" => &mut query.q,
                "league" => &mut query.league,
                "year" => &mut query.year,
                "team" => &mut query.team,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }

    fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    fn to_params(&self) -> SearchParams {
        SearchParams {
            query: self.query().to_string(),
            league_filter: non_empty(&self.league),
            year_filter: non_empty(&self.year),
            team_filter: non_empty(&self.team),
            ..Default::default()
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub search_result: Option<SearchResult>,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub loading: bool,
}

/// Run the search for the page.
///
/// An empty `q` returns no result without touching the network. A
/// failed search still echoes the query and carries the error message.
pub async fn load(client: &ApiClient, page_query: &SearchPageQuery) -> SearchPage {
    let query = page_query.query();
    if query.is_empty() {
        return SearchPage {
            search_result: None,
            query: String::new(),
            error: None,
            loading: false,
        };
    }

    match client.search(&page_query.to_params()).await {
        Ok(result) => SearchPage {
            search_result: Some(result),
            query: query.to_string(),
            error: None,
            loading: false,
        },
        Err(e) => {
            tracing::error!(query = %query, error = %e, "Search error");
            metrics::record_loader_failure("search");
            SearchPage {
                search_result: None,
                query: query.to_string(),
                error: Some(e.to_string()),
                loading: false,
            }
        }
    }
}
