use litellm_admin_models::{SpendLogQuery, Team, TeamSpendSummary, summarize_team_spend};
use serde_json::Value;

use super::teams::TEAM_LIST_PATH;
use crate::client::{AdminClient, ClientResult, decode};

impl AdminClient {
    pub(crate) async fn spend_logs(&self, query: &SpendLogQuery) -> ClientResult<Value> {
        self.get("/spend/logs", &query.query_pairs()).await
    }

    /// Spend for every team, highest spender first. Costs a single team listing.
    pub(crate) async fn all_teams_spend(&self) -> ClientResult<Vec<TeamSpendSummary>> {
        let listing = self.list_teams().await?;
        let teams: Vec<Team> = decode(TEAM_LIST_PATH, &listing)?;
        Ok(summarize_team_spend(&teams))
    }
}
