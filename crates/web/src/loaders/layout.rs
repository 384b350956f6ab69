//! Top-level layout data, shared by every page

use serde::Serialize;
use tdpsearch_client::ApiClient;
use tdpsearch_common::{
    metrics,
    models::{League, TdpName, TeamName},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutData {
    pub papers: Vec<TdpName>,
    pub teams: Vec<TeamName>,
    pub leagues: Vec<League>,
    pub years: Vec<u32>,
}

/// Fetch papers, teams, leagues and years concurrently.
///
/// If any of the four requests fails all results are dropped and four
/// empty lists are returned; this never fails.
pub async fn load(client: &ApiClient) -> LayoutData {
    let fetched = futures::try_join!(
        client.list_papers(),
        client.list_teams(None),
        client.list_leagues(),
        client.list_years()
    );

    match fetched {
        Ok((papers, teams, leagues, years)) => LayoutData {
            papers,
            teams,
            leagues,
            years,
        },
        Err(e) => {
            tracing::error!(error = %e, "Error loading initial data");
            metrics::record_loader_failure("layout");
            LayoutData::default()
        }
    }
}
