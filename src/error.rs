use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by [`SessionStore`](crate::SessionStore) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The store was configured without a usable connection source, or a
    /// configuration value could not be parsed.
    #[error("invalid session store configuration: {message}")]
    Config { message: String },

    /// Creating the session table or one of its indexes failed. The next
    /// operation retries schema creation.
    #[error("failed to initialize session table `{table}`: {source}")]
    Init {
        table: String,
        #[source]
        source: DbErr,
    },

    /// `save` could not find the archive file for the session.
    #[error("session archive not found at {path}")]
    ArchiveNotFound { path: PathBuf },

    /// No active row exists for the session.
    #[error("session `{session}` not found or expired")]
    SessionNotFound { session: String },

    /// The session name is empty or could escape the archive directory.
    #[error("invalid session name `{name}`")]
    InvalidSessionName { name: String },

    /// A query failed. `operation` names what the store was doing.
    #[error("failed to {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },

    /// Reading the archive or writing the extracted copy failed.
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// [`SessionStore::close`](crate::SessionStore::close) was called.
    #[error("session store is closed")]
    Closed,
}

impl Error {
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn database(operation: &'static str, source: DbErr) -> Self {
        Self::Database { operation, source }
    }

    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for the two "not found" conditions: a missing archive
    /// on save and a missing or expired session on extract.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ArchiveNotFound { .. } | Self::SessionNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_the_operation() {
        let err = Error::database("list sessions", DbErr::Custom("boom".into()));
        let message = err.to_string();
        assert!(message.starts_with("failed to list sessions"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn not_found_variants() {
        assert!(Error::ArchiveNotFound {
            path: PathBuf::from("a.zip")
        }
        .is_not_found());
        assert!(Error::SessionNotFound {
            session: "a".into()
        }
        .is_not_found());
        assert!(!Error::Closed.is_not_found());
    }
}
