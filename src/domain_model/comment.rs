use crate::domain_model::{IssueId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
pub struct CommentId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub issue: IssueId,
    pub author: UserId,
    pub body: String,
    /// Staff-only notes are hidden from clients by the server.
    pub internal: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDraft {
    pub body: String,
    pub internal: bool,
}
