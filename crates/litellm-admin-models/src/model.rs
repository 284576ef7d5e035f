//! Model catalogue served by `GET /models`.

use serde::{Deserialize, Serialize};

/// OpenAI-style model listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelListResponse {
    #[serde(default)]
    /// Models exposed by the gateway.
    pub data: Vec<ModelEntry>,
}

/// Single model entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelEntry {
    #[serde(default)]
    /// Model name as routed by the gateway.
    pub id: Option<String>,
}

impl ModelListResponse {
    /// Model ids in the order served, skipping entries without one.
    #[must_use]
    pub fn into_ids(self) -> Vec<String> {
        self.data.into_iter().filter_map(|entry| entry.id).collect()
    }
}
