use litellm_admin_models::ModelListResponse;
use serde_json::Value;

use crate::client::{AdminClient, ClientResult};

impl AdminClient {
    pub(crate) async fn health(&self) -> ClientResult<Value> {
        self.get("/health", &[]).await
    }

    /// Ids of the models the gateway routes, in the order served.
    pub(crate) async fn list_models(&self) -> ClientResult<Vec<String>> {
        let listing: ModelListResponse = self.get("/models", &[]).await?;
        Ok(listing.into_ids())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::client::{ClientError, test_client};

    #[tokio::test]
    async fn list_models_extracts_ids() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/models");
            then.status(200).json_body(json!({
                "object": "list",
                "data": [{ "id": "gpt-4o" }, { "id": "claude-3-haiku" }]
            }));
        });

        let ids = test_client(&server.base_url())
            .list_models()
            .await
            .expect("models should load");
        assert_eq!(ids, vec!["gpt-4o", "claude-3-haiku"]);
    }

    #[tokio::test]
    async fn unhealthy_gateway_is_an_api_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(503).body("upstream unavailable");
        });

        let err = test_client(&server.base_url())
            .health()
            .await
            .expect_err("503 must fail");
        assert!(matches!(err, ClientError::Api { status: 503, ref body } if body == "upstream unavailable"));
    }
}
