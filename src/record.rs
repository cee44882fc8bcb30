use serde::Serialize;
use time::OffsetDateTime;

use crate::metadata::Metadata;

/// An active session as returned by `list_sessions` and
/// `get_session_metadata`. `session` is the caller-facing name, without the
/// key prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session: String,
    pub metadata: Metadata,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}

/// Table-wide figures. `total_sessions`, `oldest_session` and
/// `latest_update` include expired rows that have not been cleaned up yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_sessions: u64,
    pub active_sessions: u64,
    pub expired_sessions: u64,
    /// Mean archive size in bytes; `None` for an empty table.
    pub avg_size_bytes: Option<f64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub oldest_session: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub latest_update: Option<OffsetDateTime>,
}
