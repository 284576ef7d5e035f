use litellm_admin_models::SpendLogQuery;

use crate::cli::{OutputFormat, SpendArgs};
use crate::client::{AdminClient, CliError, CliResult};
use crate::output::{render_json, render_team_spend};

pub(crate) async fn handle_spend(client: &AdminClient, args: SpendArgs) -> CliResult<()> {
    if let Some((start, end)) = args.start.zip(args.end).filter(|(start, end)| start > end) {
        return Err(CliError::validation(format!(
            "--start ({start}) must not be after --end ({end})"
        )));
    }

    let query = SpendLogQuery {
        start_date: args.start,
        end_date: args.end,
        team_id: args.team,
    };
    let report = client.spend_logs(&query).await?;
    render_json(&report)
}

pub(crate) async fn handle_all_teams(client: &AdminClient, output: OutputFormat) -> CliResult<()> {
    let summary = client.all_teams_spend().await?;
    render_team_spend(&summary, output)
}
