use litellm_admin_models::{KeyGenerateRequest, KeyPatch};
use serde_json::Value;

use super::{model_list, model_patch};
use crate::cli::{
    KeyCreateArgs, KeyDeleteArgs, KeyInfoArgs, KeyListArgs, KeyUpdateArgs, OutputFormat,
};
use crate::client::{AdminClient, CliError, CliResult};
use crate::confirm::Confirm;
use crate::output::{key_list_text, render_json, to_json};

pub(crate) async fn handle_key_list(
    client: &AdminClient,
    args: KeyListArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let listing = client.list_keys(args.team.as_deref()).await?;
    print!("{}", key_list_text(&listing, output)?);
    Ok(())
}

pub(crate) async fn handle_key_info(client: &AdminClient, args: KeyInfoArgs) -> CliResult<()> {
    let info = client.key_info(&args.key).await?;
    render_json(&info)
}

pub(crate) async fn handle_key_create(
    client: &AdminClient,
    args: KeyCreateArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let request = KeyGenerateRequest {
        team_id: args.team,
        key_alias: args.alias,
        max_budget: args.budget,
        models: model_list(args.models),
        user_id: args.user,
        duration: args.duration,
    };
    let generated = client.generate_key(&request).await?;
    let body = to_json(&generated)?;

    if output == OutputFormat::Table {
        println!();
        println!(
            "New API Key: {}",
            generated.get("key").and_then(Value::as_str).unwrap_or("N/A")
        );
        println!("Save this key! It cannot be retrieved later.");
    }
    println!("{body}");
    Ok(())
}

pub(crate) async fn handle_key_update(client: &AdminClient, args: KeyUpdateArgs) -> CliResult<()> {
    let patch = KeyPatch {
        team_id: args.team,
        key_alias: args.alias,
        max_budget: args.budget,
        models: model_patch(args.models),
        duration: args.duration,
        ..KeyPatch::new(args.key)
    };
    if patch.is_empty() {
        return Err(CliError::validation(
            "nothing to update: pass at least one of --team, --alias, --budget, --models, --duration",
        ));
    }

    let result = client.update_key(&patch).await?;
    render_json(&result)
}

pub(crate) async fn handle_key_delete(
    client: &AdminClient,
    args: KeyDeleteArgs,
    prompt: &mut dyn Confirm,
) -> CliResult<()> {
    // The prompt must not echo the key itself.
    if !args.force && !prompt.confirm("Delete this key?")? {
        println!("Aborted");
        return Ok(());
    }

    let result = client.delete_key(&args.key).await?;
    render_json(&result)
}
