#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire DTOs for the LiteLLM proxy admin API.
//!
//! Request bodies only carry the fields a caller actually supplied: optional
//! values are skipped on serialisation instead of being sent as `null`. Response
//! types are typed views used for tables and aggregation; they keep unmodelled
//! fields in a flattened `extra` map and accept `null` where a list is expected.

pub mod key;
pub mod model;
pub mod spend;
pub mod team;
pub mod user;

pub use key::{
    KeyDeleteRequest, KeyGenerateRequest, KeyListEntry, KeyListResponse, KeyPatch, KeyRecord,
};
pub use model::{ModelEntry, ModelListResponse};
pub use spend::{
    SpendLogQuery, TeamSpendSummary, UNNAMED_TEAM, budget_remaining, summarize_team_spend,
};
pub use team::{
    MemberRole, Team, TeamCreateRequest, TeamDeleteRequest, TeamMember, TeamMemberAddRequest,
    TeamMemberRemoveRequest, TeamPatch,
};
pub use user::UserCreateRequest;
