use litellm_admin_models::UserCreateRequest;

use crate::cli::{UserCreateArgs, UserInfoArgs};
use crate::client::{AdminClient, CliResult};
use crate::output::render_json;

pub(crate) async fn handle_user_list(client: &AdminClient) -> CliResult<()> {
    let users = client.list_users().await?;
    render_json(&users)
}

pub(crate) async fn handle_user_info(client: &AdminClient, args: UserInfoArgs) -> CliResult<()> {
    let user = client.user_info(&args.user_id).await?;
    render_json(&user)
}

pub(crate) async fn handle_user_create(
    client: &AdminClient,
    args: UserCreateArgs,
) -> CliResult<()> {
    let request = UserCreateRequest {
        user_email: args.email,
        user_id: args.user_id,
        teams: args.team.into_iter().collect(),
    };
    let user = client.create_user(&request).await?;
    render_json(&user)
}
