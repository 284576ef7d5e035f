//! Virtual API keys: listing, generation, updates, and deletion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A key record as returned by `GET /key/list` when full objects are served.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Hashed or raw token identifying the key.
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable alias.
    pub key_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Owning team.
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Owning user.
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Budget cap in USD; `None` means unlimited.
    pub max_budget: Option<f64>,
    #[serde(flatten)]
    /// Fields not modelled above, preserved verbatim.
    pub extra: Map<String, Value>,
}

/// Entry in a key listing.
///
/// Depending on server configuration the listing carries either bare token
/// strings or full key objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum KeyListEntry {
    /// Bare token string.
    Token(String),
    /// Full key object.
    Record(KeyRecord),
}

impl KeyListEntry {
    /// Token of the key, or an empty string when the record carries none.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Token(token) => token,
            Self::Record(record) => record.token.as_deref().unwrap_or_default(),
        }
    }

    /// Alias of the key when known.
    #[must_use]
    pub fn key_alias(&self) -> Option<&str> {
        match self {
            Self::Token(_) => None,
            Self::Record(record) => record.key_alias.as_deref(),
        }
    }

    /// Owning team when known.
    #[must_use]
    pub fn team_id(&self) -> Option<&str> {
        match self {
            Self::Token(_) => None,
            Self::Record(record) => record.team_id.as_deref(),
        }
    }

    /// Budget cap when known.
    #[must_use]
    pub const fn max_budget(&self) -> Option<f64> {
        match self {
            Self::Token(_) => None,
            Self::Record(record) => record.max_budget,
        }
    }
}

/// Response of `GET /key/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Keys visible to the caller; some servers send `null` for none.
    pub keys: Option<Vec<KeyListEntry>>,
    #[serde(flatten)]
    /// Pagination and other fields, preserved verbatim.
    pub extra: Map<String, Value>,
}

/// Body for `POST /key/generate`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct KeyGenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Team that will own the key.
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Alias for the key.
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Budget cap in USD.
    pub max_budget: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    /// Allowed models; omitted when empty.
    pub models: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// User that will own the key.
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Validity period (for example `30d`).
    pub duration: Option<String>,
}

/// Body for `POST /key/update`; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct KeyPatch {
    /// Key being updated.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Move the key to this team.
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement alias.
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement budget cap.
    pub max_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement model list.
    pub models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement validity period.
    pub duration: Option<String>,
}

impl KeyPatch {
    /// Start an empty patch for the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.team_id.is_none()
            && self.key_alias.is_none()
            && self.max_budget.is_none()
            && self.models.is_none()
            && self.duration.is_none()
    }
}

/// Body for `POST /key/delete`. The endpoint deletes in batches.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyDeleteRequest {
    /// Keys to delete.
    pub keys: Vec<String>,
}

impl KeyDeleteRequest {
    /// Wrap a single key in the batch shape the endpoint expects.
    #[must_use]
    pub fn single(key: impl Into<String>) -> Self {
        Self {
            keys: vec![key.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_accepts_tokens_and_records() {
        let raw = json!({
            "keys": [
                "88dc28d0f030c55ed4ab77ed8faf098196cb1c05df778539800c9f1243fe6b4b",
                { "token": "sk-abc", "key_alias": "ci", "team_id": "t-1", "max_budget": 5 }
            ],
            "total_count": 2
        });
        let listing: KeyListResponse = serde_json::from_value(raw).expect("deserialize");
        let keys = listing.keys.as_deref().expect("keys present");
        assert_eq!(keys.len(), 2);
        assert!(matches!(keys[0], KeyListEntry::Token(_)));
        assert_eq!(keys[0].key_alias(), None);
        assert_eq!(keys[1].token(), "sk-abc");
        assert_eq!(keys[1].team_id(), Some("t-1"));
        assert_eq!(keys[1].max_budget(), Some(5.0));
        assert_eq!(listing.extra.get("total_count"), Some(&json!(2)));
    }

    #[test]
    fn generate_request_sends_only_supplied_fields() {
        let request = KeyGenerateRequest {
            team_id: Some("t-1".into()),
            models: vec!["claude-3".into(), "gpt-4o".into()],
            ..KeyGenerateRequest::default()
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            json!({ "team_id": "t-1", "models": ["claude-3", "gpt-4o"] })
        );
        let empty = serde_json::to_value(KeyGenerateRequest::default()).expect("serialize");
        assert_eq!(empty, json!({}));
    }

    #[test]
    fn patch_and_delete_shapes() {
        let mut patch = KeyPatch::new("sk-1");
        assert!(patch.is_empty());
        patch.key_alias = Some("renamed".into());
        assert_eq!(
            serde_json::to_value(&patch).expect("serialize"),
            json!({ "key": "sk-1", "key_alias": "renamed" })
        );
        assert_eq!(
            serde_json::to_value(KeyDeleteRequest::single("sk-1")).expect("serialize"),
            json!({ "keys": ["sk-1"] })
        );
    }
}
