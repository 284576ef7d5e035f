use litellm_admin_models::UserCreateRequest;
use serde_json::Value;

use crate::client::{AdminClient, ClientResult};

impl AdminClient {
    pub(crate) async fn list_users(&self) -> ClientResult<Value> {
        self.get("/user/list", &[]).await
    }

    pub(crate) async fn user_info(&self, user_id: &str) -> ClientResult<Value> {
        self.get("/user/info", &[("user_id", user_id.to_string())])
            .await
    }

    pub(crate) async fn create_user(&self, request: &UserCreateRequest) -> ClientResult<Value> {
        self.post("/user/new", request).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::client::test_client;

    #[tokio::test]
    async fn user_endpoints_round_trip() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET).path("/user/list");
            then.status(200).json_body(json!({ "users": [] }));
        });
        let info = server.mock(|when, then| {
            when.method(GET)
                .path("/user/info")
                .query_param("user_id", "u-1");
            then.status(200).json_body(json!({ "user_id": "u-1" }));
        });
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/user/new")
                .json_body(json!({ "user_email": "ops@example.com", "teams": ["t-1"] }));
            then.status(200).json_body(json!({ "user_id": "u-2", "key": "sk-user" }));
        });

        let client = test_client(&server.base_url());
        client.list_users().await.expect("list should succeed");
        let user = client.user_info("u-1").await.expect("info should succeed");
        assert_eq!(user["user_id"], "u-1");
        let request = UserCreateRequest {
            user_email: Some("ops@example.com".into()),
            user_id: None,
            teams: vec!["t-1".into()],
        };
        client
            .create_user(&request)
            .await
            .expect("create should succeed");
        list.assert();
        info.assert();
        create.assert();
    }
}
