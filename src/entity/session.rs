//! Query-result models for the session table.

use sea_orm::prelude::{DateTimeWithTimeZone, Json};
use sea_orm::FromQueryResult;

/// A session row without its archive blob.
///
/// # Database Schema
///
/// | Column       | Type                    | Description                          |
/// |--------------|-------------------------|--------------------------------------|
/// | session_id   | VARCHAR(255) (PK)       | Namespaced session name              |
/// | session_data | BYTEA                   | Archive content                      |
/// | metadata     | JSONB                   | Arbitrary JSON object, default `{}`  |
/// | created_at   | TIMESTAMPTZ             | Set once on insert                   |
/// | updated_at   | TIMESTAMPTZ             | Refreshed on every write and extract |
/// | expires_at   | TIMESTAMPTZ NULL        | `NULL` means the session never expires |
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct SessionRow {
    pub session_id: String,
    pub metadata: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub expires_at: Option<DateTimeWithTimeZone>,
}

/// The archive blob and its metadata, as loaded by `extract`.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct ArchiveRow {
    pub session_data: Vec<u8>,
    pub metadata: Option<Json>,
}

/// Result of the single aggregate query behind `get_stats`.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct StatsRow {
    pub total_sessions: i64,
    pub active_sessions: i64,
    pub expired_sessions: i64,
    pub avg_size_bytes: Option<f64>,
    pub oldest_session: Option<DateTimeWithTimeZone>,
    pub latest_update: Option<DateTimeWithTimeZone>,
}
