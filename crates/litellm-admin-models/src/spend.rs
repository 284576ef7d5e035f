//! Spend reporting: the `/spend/logs` query and the all-teams summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::team::Team;

/// Alias reported for teams that have none.
pub const UNNAMED_TEAM: &str = "N/A";

/// Filters for `GET /spend/logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendLogQuery {
    /// Inclusive start of the reporting window.
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the reporting window.
    pub end_date: Option<NaiveDate>,
    /// Restrict the report to one team.
    pub team_id: Option<String>,
}

impl SpendLogQuery {
    /// Query parameters for the supplied filters only, dates as `YYYY-MM-DD`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(team_id) = &self.team_id {
            pairs.push(("team_id", team_id.clone()));
        }
        pairs
    }
}

/// One row of the all-teams spend summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSpendSummary {
    /// Team identifier, when the service reported one.
    pub team_id: Option<String>,
    /// Team alias, or [`UNNAMED_TEAM`].
    pub team_alias: String,
    /// Spend to date; missing spend counts as zero.
    pub spend: f64,
    /// Budget cap; `None` means unlimited.
    pub max_budget: Option<f64>,
    /// `max_budget - spend`, absent when the team has no budget.
    pub budget_remaining: Option<f64>,
}

/// Remaining budget for a team, `None` when no budget is set.
#[must_use]
pub fn budget_remaining(max_budget: Option<f64>, spend: f64) -> Option<f64> {
    max_budget.map(|budget| budget - spend)
}

/// Summarise team spend, highest spender first.
///
/// Teams with equal spend keep their relative order from `teams`.
#[must_use]
pub fn summarize_team_spend(teams: &[Team]) -> Vec<TeamSpendSummary> {
    let mut summary: Vec<TeamSpendSummary> = teams
        .iter()
        .map(|team| {
            let spend = team.spend.unwrap_or(0.0);
            TeamSpendSummary {
                team_id: team.team_id.clone(),
                team_alias: team
                    .team_alias
                    .clone()
                    .unwrap_or_else(|| UNNAMED_TEAM.to_string()),
                spend,
                max_budget: team.max_budget,
                budget_remaining: budget_remaining(team.max_budget, spend),
            }
        })
        .collect();
    // `sort_by` is stable, which keeps ties in listing order.
    summary.sort_by(|a, b| b.spend.total_cmp(&a.spend));
    summary
}
