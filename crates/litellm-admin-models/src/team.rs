//! Team records, membership payloads, and team mutation requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A team as returned by `GET /team/list`, `POST /team/new`, and friends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Server-assigned team identifier.
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable team alias.
    pub team_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Budget cap in USD; `None` means the team is unlimited.
    pub max_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Spend accumulated since the last budget reset.
    pub spend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Budget reset period (for example `30d`).
    pub budget_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Models the team may call; absent or `null` means the service default.
    pub models: Option<Vec<String>>,
    #[serde(flatten)]
    /// Fields not modelled above, preserved verbatim.
    pub extra: Map<String, Value>,
}

/// Role a member holds within a team.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Regular member.
    #[default]
    User,
    /// Team administrator.
    Admin,
}

/// Member entry nested inside [`TeamMemberAddRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    /// User being added to the team.
    pub user_id: String,
    /// Role granted to the user.
    pub role: MemberRole,
}

/// Body for `POST /team/new`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TeamCreateRequest {
    /// Alias of the new team.
    pub team_alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional budget cap in USD.
    pub max_budget: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    /// Allowed models; omitted when empty.
    pub models: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional budget reset period.
    pub budget_duration: Option<String>,
}

/// Body for `POST /team/update`.
///
/// Every field besides `team_id` is independently optional and is left out of
/// the payload when unset, so the service only touches what was supplied.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TeamPatch {
    /// Team being updated.
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement alias.
    pub team_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement budget cap.
    pub max_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement model list.
    pub models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement budget reset period.
    pub budget_duration: Option<String>,
}

impl TeamPatch {
    /// Start an empty patch for the given team.
    #[must_use]
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            ..Self::default()
        }
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.team_alias.is_none()
            && self.max_budget.is_none()
            && self.models.is_none()
            && self.budget_duration.is_none()
    }
}

/// Body for `POST /team/delete`. The endpoint deletes in batches.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamDeleteRequest {
    /// Teams to delete.
    pub team_ids: Vec<String>,
}

impl TeamDeleteRequest {
    /// Wrap a single team id in the batch shape the endpoint expects.
    #[must_use]
    pub fn single(team_id: impl Into<String>) -> Self {
        Self {
            team_ids: vec![team_id.into()],
        }
    }
}

/// Body for `POST /team/member_add`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamMemberAddRequest {
    /// Team receiving the member.
    pub team_id: String,
    /// Member to add.
    pub member: TeamMember,
}

/// Body for `POST /team/member_delete`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamMemberRemoveRequest {
    /// Team losing the member.
    pub team_id: String,
    /// User to remove.
    pub user_id: String,
}
