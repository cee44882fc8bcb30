//! Row models for the session table.
//!
//! The table name is chosen at runtime, so these are query-result models
//! decoded from raw statements rather than full `DeriveEntityModel` entities.

/// Rows read back from the session table.
pub mod session;
