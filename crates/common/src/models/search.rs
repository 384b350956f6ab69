//! Search request and response shapes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{League, TeamName};

/// Response envelope used by the backend: `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// One retrieved passage of a paper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultChunk {
    pub league_year_team_idx: String,
    pub league: League,
    pub year: u32,
    pub team: TeamName,
    pub paragraph_sequence_id: u32,
    pub chunk_sequence_id: u32,
    pub idx_begin: u32,
    pub idx_end: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: SearchResultChunk,
    pub score: f32,
}

/// Query-refinement hints returned alongside results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSuggestions {
    pub teams: Vec<String>,
    pub leagues: Vec<String>,
}

/// Constraints the backend applied to a search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leagues: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_year_team_indexes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub filter: Option<Filter>,
    /// Ordered by relevance, as returned
    pub chunks: Vec<ScoredChunk>,
    #[serde(default)]
    pub suggestions: SearchSuggestions,
}

/// Retrieval mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Dense,
    Sparse,
    #[default]
    Hybrid,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Dense => "dense",
            SearchType::Sparse => "sparse",
            SearchType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search type: {0}")]
pub struct UnknownSearchType(pub String);

impl FromStr for SearchType {
    type Err = UnknownSearchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(SearchType::Dense),
            "sparse" => Ok(SearchType::Sparse),
            "hybrid" => Ok(SearchType::Hybrid),
            _ => Err(UnknownSearchType(s.to_string())),
        }
    }
}

/// Parameters of a `/search` request
///
/// Filters are passed through as the backend expects them; an unset or
/// empty filter is left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub league_filter: Option<String>,
    #[serde(default)]
    pub year_filter: Option<String>,
    #[serde(default)]
    pub team_filter: Option<String>,
    #[serde(default)]
    pub lyti_filter: Option<String>,
    #[serde(default)]
    pub search_type: Option<SearchType>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league_filter = Some(league.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year_filter = Some(year.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team_filter = Some(team.into());
        self
    }

    pub fn with_lyti(mut self, lyti: impl Into<String>) -> Self {
        self.lyti_filter = Some(lyti.into());
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    /// Search type sent to the backend
    pub fn effective_search_type(&self) -> SearchType {
        self.search_type.unwrap_or_default()
    }
}
