use litellm_admin_models::{
    TeamCreateRequest, TeamDeleteRequest, TeamMember, TeamMemberAddRequest,
    TeamMemberRemoveRequest, TeamPatch,
};
use serde_json::Value;

use crate::client::{AdminClient, ClientResult};

pub(crate) const TEAM_LIST_PATH: &str = "/team/list";

impl AdminClient {
    /// Raw team listing; decode with [`TEAM_LIST_PATH`] for a typed view.
    pub(crate) async fn list_teams(&self) -> ClientResult<Value> {
        self.get(TEAM_LIST_PATH, &[]).await
    }

    pub(crate) async fn team_info(&self, team_id: &str) -> ClientResult<Value> {
        self.get("/team/info", &[("team_id", team_id.to_string())])
            .await
    }

    pub(crate) async fn create_team(&self, request: &TeamCreateRequest) -> ClientResult<Value> {
        self.post("/team/new", request).await
    }

    pub(crate) async fn update_team(&self, patch: &TeamPatch) -> ClientResult<Value> {
        self.post("/team/update", patch).await
    }

    pub(crate) async fn delete_team(&self, team_id: &str) -> ClientResult<Value> {
        self.post("/team/delete", &TeamDeleteRequest::single(team_id))
            .await
    }

    pub(crate) async fn add_team_member(
        &self,
        team_id: &str,
        member: TeamMember,
    ) -> ClientResult<Value> {
        let request = TeamMemberAddRequest {
            team_id: team_id.to_string(),
            member,
        };
        self.post("/team/member_add", &request).await
    }

    pub(crate) async fn remove_team_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> ClientResult<Value> {
        let request = TeamMemberRemoveRequest {
            team_id: team_id.to_string(),
            user_id: user_id.to_string(),
        };
        self.post("/team/member_delete", &request).await
    }
}
