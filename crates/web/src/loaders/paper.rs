//! Paper detail page

use serde::Serialize;
use tdpsearch_client::ApiClient;
use tdpsearch_common::{
    errors::{AppError, Result},
    metrics,
    models::{Paper, PaperId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperMetadata {
    pub league: String,
    pub team: String,
    pub year: u32,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperPage {
    /// Markdown body
    pub content: Paper,
    pub metadata: PaperMetadata,
}

impl From<PaperId> for PaperMetadata {
    fn from(id: PaperId) -> Self {
        Self {
            league: id.league,
            team: id.team,
            year: id.year,
            index: id.index,
        }
    }
}

/// Parse the `league__year__team__index` route parameter
pub fn parse_id(id: &str) -> Result<PaperId> {
    id.parse().map_err(|e| AppError::InvalidPaperId {
        message: format!("{}. Expected: league__year__team__index", e),
    })
}

/// Load one paper.
///
/// A malformed id fails with [`AppError::InvalidPaperId`] before any
/// request is made. Any failure after that is reported as
/// [`AppError::PaperNotFound`], whatever the cause.
pub async fn load(client: &ApiClient, id: &str) -> Result<PaperPage> {
    let paper_id = parse_id(id)?;

    match client
        .get_paper(&paper_id.league, paper_id.year, &paper_id.team, Some(paper_id.index))
        .await
    {
        Ok(content) => Ok(PaperPage {
            content,
            metadata: paper_id.into(),
        }),
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Error loading paper");
            metrics::record_loader_failure("paper");
            Err(AppError::PaperNotFound { id: id.to_string() })
        }
    }
}
