use litellm_admin_models::{MemberRole, TeamCreateRequest, TeamMember, TeamPatch};
use serde_json::Value;

use super::{model_list, model_patch};
use crate::cli::{OutputFormat, TeamCreateArgs, TeamDeleteArgs, TeamInfoArgs, TeamUpdateArgs};
use crate::client::{AdminClient, CliError, CliResult};
use crate::confirm::Confirm;
use crate::output::{render_json, team_list_text, to_json};

const NO_TEAM_ID: &str = "N/A";

pub(crate) async fn handle_team_list(client: &AdminClient, output: OutputFormat) -> CliResult<()> {
    let listing = client.list_teams().await?;
    print!("{}", team_list_text(&listing, output)?);
    Ok(())
}

pub(crate) async fn handle_team_info(client: &AdminClient, args: TeamInfoArgs) -> CliResult<()> {
    let team = client.team_info(&args.team_id).await?;
    render_json(&team)
}

pub(crate) async fn handle_team_create(
    client: &AdminClient,
    args: TeamCreateArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let alias = args.alias.trim();
    if alias.is_empty() {
        return Err(CliError::validation("team alias must not be empty"));
    }

    let request = TeamCreateRequest {
        team_alias: alias.to_string(),
        max_budget: args.budget,
        models: model_list(args.models),
        budget_duration: args.budget_duration,
    };
    let team = client.create_team(&request).await?;
    let body = to_json(&team)?;

    if output == OutputFormat::Table {
        println!(
            "Created team: {}",
            team.get("team_id")
                .and_then(Value::as_str)
                .unwrap_or(NO_TEAM_ID)
        );
    }
    println!("{body}");
    Ok(())
}

pub(crate) async fn handle_team_update(
    client: &AdminClient,
    args: TeamUpdateArgs,
) -> CliResult<()> {
    let patch = TeamPatch {
        team_alias: args.alias,
        max_budget: args.budget,
        models: model_patch(args.models),
        budget_duration: args.budget_duration,
        ..TeamPatch::new(args.team_id)
    };
    if patch.is_empty() {
        return Err(CliError::validation(
            "nothing to update: pass at least one of --alias, --budget, --models, --budget-duration",
        ));
    }

    let result = client.update_team(&patch).await?;
    render_json(&result)
}

pub(crate) async fn handle_team_delete(
    client: &AdminClient,
    args: TeamDeleteArgs,
    prompt: &mut dyn Confirm,
) -> CliResult<()> {
    if !args.force && !prompt.confirm(&format!("Delete team {}?", args.team_id))? {
        println!("Aborted");
        return Ok(());
    }

    let result = client.delete_team(&args.team_id).await?;
    tracing::debug!(team_id = %args.team_id, "team deleted");
    render_json(&result)
}

/// Shared by `team add-member` and `user add-to-team`.
pub(crate) async fn handle_member_add(
    client: &AdminClient,
    team_id: &str,
    user_id: &str,
    role: MemberRole,
) -> CliResult<()> {
    let member = TeamMember {
        user_id: user_id.to_string(),
        role,
    };
    let result = client.add_team_member(team_id, member).await?;
    render_json(&result)
}

pub(crate) async fn handle_member_remove(
    client: &AdminClient,
    team_id: &str,
    user_id: &str,
) -> CliResult<()> {
    let result = client.remove_team_member(team_id, user_id).await?;
    render_json(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{request_count, test_client};
    use crate::confirm::ScriptedConfirm;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_trims_alias_and_sends_models_in_order() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/team/new").json_body(json!({
                "team_alias": "research",
                "max_budget": 100.0,
                "models": ["gpt-4o", "claude", "gpt-4o"]
            }));
            then.status(200)
                .json_body(json!({ "team_id": "t-9", "team_alias": "research" }));
        });

        let args = TeamCreateArgs {
            alias: "  research ".into(),
            budget: Some(100.0),
            models: vec!["gpt-4o".into(), "claude".into(), "gpt-4o".into()],
            budget_duration: None,
        };
        handle_team_create(&test_client(&server.base_url()), args, OutputFormat::Table)
            .await
            .expect("create succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn blank_alias_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({}));
        });

        let args = TeamCreateArgs {
            alias: "   ".into(),
            budget: None,
            models: Vec::new(),
            budget_duration: None,
        };
        let err = handle_team_create(&test_client(&server.base_url()), args, OutputFormat::Json)
            .await
            .expect_err("blank alias");
        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(request_count(&mock), 0);
    }

    #[tokio::test]
    async fn empty_update_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({}));
        });

        let args = TeamUpdateArgs {
            team_id: "t-1".into(),
            alias: None,
            budget: None,
            models: None,
            budget_duration: None,
        };
        let err = handle_team_update(&test_client(&server.base_url()), args)
            .await
            .expect_err("empty patch");
        assert!(matches!(err, CliError::Validation(ref message) if message.contains("--alias")));
        assert_eq!(request_count(&mock), 0);
    }

    #[tokio::test]
    async fn blank_models_are_not_sent() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/team/new")
                .json_body(json!({ "team_alias": "research" }));
            then.status(200).json_body(json!({ "team_id": "t-9" }));
        });
        let client = test_client(&server.base_url());

        let args = TeamCreateArgs {
            alias: "research".into(),
            budget: None,
            models: vec![String::new()],
            budget_duration: None,
        };
        handle_team_create(&client, args, OutputFormat::Json)
            .await
            .expect("create succeeds");
        mock.assert();

        let args = TeamUpdateArgs {
            team_id: "t-9".into(),
            alias: None,
            budget: None,
            models: Some(vec![String::new()]),
            budget_duration: None,
        };
        let err = handle_team_update(&client, args)
            .await
            .expect_err("blank models leave nothing to update");
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[tokio::test]
    async fn list_accepts_null_models_in_both_modes() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/team/list");
            then.status(200)
                .json_body(json!([{ "team_id": "t1", "spend": 50, "models": null }]));
        });
        let client = test_client(&server.base_url());

        handle_team_list(&client, OutputFormat::Table)
            .await
            .expect("table renders");
        handle_team_list(&client, OutputFormat::Json)
            .await
            .expect("json renders");
        assert_eq!(request_count(&mock), 2);
    }

    #[tokio::test]
    async fn update_sends_only_supplied_fields() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/team/update")
                .json_body(json!({ "team_id": "t-1", "max_budget": 0.0 }));
            then.status(200).json_body(json!({ "team_id": "t-1" }));
        });

        let args = TeamUpdateArgs {
            team_id: "t-1".into(),
            alias: None,
            budget: Some(0.0),
            models: None,
            budget_duration: None,
        };
        handle_team_update(&test_client(&server.base_url()), args)
            .await
            .expect("update succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn anything_but_y_aborts_delete() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/team/delete");
            then.status(200).json_body(json!({}));
        });
        let client = test_client(&server.base_url());

        for answer in ["", "n", "yes", "N"] {
            let mut prompt = ScriptedConfirm::answering(&[answer]);
            let args = TeamDeleteArgs {
                team_id: "t-1".into(),
                force: false,
            };
            handle_team_delete(&client, args, &mut prompt)
                .await
                .expect("abort is not an error");
            assert_eq!(prompt.questions, vec!["Delete team t-1?"]);
        }
        assert_eq!(request_count(&mock), 0);
    }

    #[tokio::test]
    async fn add_member_posts_role() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/team/member_add").json_body(json!({
                "team_id": "t-1",
                "member": { "user_id": "u-1", "role": "admin" }
            }));
            then.status(200).json_body(json!({ "team_id": "t-1" }));
        });

        handle_member_add(
            &test_client(&server.base_url()),
            "t-1",
            "u-1",
            MemberRole::Admin,
        )
        .await
        .expect("member added");
        mock.assert();
    }

    #[tokio::test]
    async fn remove_member_surfaces_api_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/team/member_delete");
            then.status(404).body("team not found");
        });

        let err = handle_member_remove(&test_client(&server.base_url()), "t-x", "u-1")
            .await
            .expect_err("404 must fail");
        assert_eq!(err.display_message(), "API Error: 404 - team not found");
    }
}
