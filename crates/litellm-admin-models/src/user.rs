//! Internal user provisioning.

use serde::Serialize;

/// Body for `POST /user/new`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UserCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Email address of the user.
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Explicit user id; the service generates one when omitted.
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    /// Teams the user joins on creation.
    pub teams: Vec<String>,
}
