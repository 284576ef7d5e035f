use litellm_admin_models::{KeyDeleteRequest, KeyGenerateRequest, KeyPatch};
use serde_json::Value;

use crate::client::{AdminClient, ClientResult};

pub(crate) const KEY_LIST_PATH: &str = "/key/list";

impl AdminClient {
    /// Raw key listing; decode with [`KEY_LIST_PATH`] for a typed view.
    pub(crate) async fn list_keys(&self, team_id: Option<&str>) -> ClientResult<Value> {
        let mut query = Vec::new();
        if let Some(team_id) = team_id {
            query.push(("team_id", team_id.to_string()));
        }
        self.get(KEY_LIST_PATH, &query).await
    }

    pub(crate) async fn key_info(&self, key: &str) -> ClientResult<Value> {
        self.get("/key/info", &[("key", key.to_string())]).await
    }

    /// The response is the only place the raw key is ever returned.
    pub(crate) async fn generate_key(&self, request: &KeyGenerateRequest) -> ClientResult<Value> {
        self.post("/key/generate", request).await
    }

    pub(crate) async fn update_key(&self, patch: &KeyPatch) -> ClientResult<Value> {
        self.post("/key/update", patch).await
    }

    pub(crate) async fn delete_key(&self, key: &str) -> ClientResult<Value> {
        self.post("/key/delete", &KeyDeleteRequest::single(key)).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::client::{decode, test_client};
    use litellm_admin_models::KeyListResponse;

    #[tokio::test]
    async fn list_keys_filters_by_team_when_given() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/key/list")
                .query_param("team_id", "t-1");
            then.status(200)
                .json_body(json!({ "keys": ["hashed-token"], "total_count": 1 }));
        });

        let raw = test_client(&server.base_url())
            .list_keys(Some("t-1"))
            .await
            .expect("list should succeed");
        mock.assert();
        let listing: KeyListResponse = decode(KEY_LIST_PATH, &raw).expect("typed view");
        let keys = listing.keys.unwrap_or_default();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].token(), "hashed-token");
    }

    #[tokio::test]
    async fn generate_key_returns_raw_key() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/key/generate").json_body(json!({
                "team_id": "t-1",
                "key_alias": "ci",
                "models": ["gpt-4o", "claude-3", "gpt-4o"],
                "duration": "30d"
            }));
            then.status(200)
                .json_body(json!({ "key": "sk-raw-secret", "expires": null }));
        });

        let request = KeyGenerateRequest {
            team_id: Some("t-1".into()),
            key_alias: Some("ci".into()),
            models: vec!["gpt-4o".into(), "claude-3".into(), "gpt-4o".into()],
            duration: Some("30d".into()),
            ..KeyGenerateRequest::default()
        };
        let generated = test_client(&server.base_url())
            .generate_key(&request)
            .await
            .expect("generate should succeed");
        mock.assert();
        assert_eq!(generated, json!({ "key": "sk-raw-secret", "expires": null }));
    }

    #[tokio::test]
    async fn update_and_delete_key_payloads() {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(POST)
                .path("/key/update")
                .json_body(json!({ "key": "sk-1", "max_budget": 0.0 }));
            then.status(200).json_body(json!({ "key": "sk-1" }));
        });
        let delete = server.mock(|when, then| {
            when.method(POST)
                .path("/key/delete")
                .json_body(json!({ "keys": ["sk-1"] }));
            then.status(200).json_body(json!({ "deleted_keys": ["sk-1"] }));
        });

        let client = test_client(&server.base_url());
        let mut patch = KeyPatch::new("sk-1");
        patch.max_budget = Some(0.0);
        client.update_key(&patch).await.expect("update should succeed");
        client.delete_key("sk-1").await.expect("delete should succeed");
        update.assert();
        delete.assert();
    }
}
