use crate::cli::OutputFormat;
use crate::client::{AdminClient, CliResult};
use crate::output::{render_json, render_models};

pub(crate) async fn handle_health(client: &AdminClient) -> CliResult<()> {
    let status = client.health().await?;
    render_json(&status)
}

/// The proxy reports models in no particular order; print them sorted.
pub(crate) async fn handle_models(client: &AdminClient, output: OutputFormat) -> CliResult<()> {
    let mut ids = client.list_models().await?;
    ids.sort();
    render_models(&ids, output)
}
