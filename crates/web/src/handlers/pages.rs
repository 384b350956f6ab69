//! Page handlers
//!
//! Each route runs its loader and returns the loader's data object.

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use tdpsearch_common::errors::Result;

use crate::loaders::{
    layout::{self, LayoutData},
    paper::{self, PaperPage},
    search::{self, SearchPage, SearchPageQuery},
};
use crate::AppState;

/// `GET /`
pub async fn layout_data(State(state): State<AppState>) -> Json<LayoutData> {
    Json(layout::load(&state.client).await)
}

/// `GET /paper/{id}`
pub async fn paper_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaperPage>> {
    Ok(Json(paper::load(&state.client, &id).await?))
}

/// `GET /search?q=&league=&year=&team=`
///
/// The query string is read leniently so any navigation renders a page.
pub async fn search_page(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<SearchPage> {
    let query = SearchPageQuery::from_query(raw.as_deref().unwrap_or_default());
    Json(search::load(&state.client, &query).await)
}
