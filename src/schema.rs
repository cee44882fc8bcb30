//! Idempotent creation of the session table and its indexes.

use sea_orm::sea_query::{
    Alias, ColumnDef, Expr, Index, IndexCreateStatement, Table, TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, DeriveIden};
use sea_orm_migration::SchemaManager;
use tracing::{info, warn};

use crate::config::validate_table_name;
use crate::error::{Error, Result};

#[derive(DeriveIden)]
enum SessionColumn {
    SessionId,
    SessionData,
    Metadata,
    CreatedAt,
    UpdatedAt,
    ExpiresAt,
}

/// Creates the table, the `updated_at` index and the partial `expires_at`
/// index unless they already exist. Safe to run repeatedly.
pub(crate) async fn create_if_missing(conn: &DatabaseConnection, table: &str) -> Result<()> {
    validate_table_name(table)?;

    let manager = SchemaManager::new(conn);

    let result = async {
        manager.create_table(table_statement(table)).await?;
        manager.create_index(updated_at_index(table)).await?;
        conn.execute_unprepared(&expires_at_index_sql(table)).await?;
        Ok::<(), DbErr>(())
    }
    .await;

    match result {
        Ok(()) => {
            info!(table, "session table ready");
            Ok(())
        }
        Err(source) => {
            warn!(table, error = %source, "session table initialization failed");
            Err(Error::Init {
                table: table.to_string(),
                source,
            })
        }
    }
}

fn table_statement(table: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(
            ColumnDef::new(SessionColumn::SessionId)
                .string_len(255)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(SessionColumn::SessionData).blob().not_null())
        .col(
            ColumnDef::new(SessionColumn::Metadata)
                .json_binary()
                .default("{}"),
        )
        .col(
            ColumnDef::new(SessionColumn::CreatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(SessionColumn::UpdatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(SessionColumn::ExpiresAt)
                .timestamp_with_time_zone()
                .null(),
        )
        .to_owned()
}

fn updated_at_index(table: &str) -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name(format!("idx_{table}_updated_at"))
        .table(Alias::new(table))
        .col(SessionColumn::UpdatedAt)
        .to_owned()
}

// Partial index, written by hand. The same text is valid on Postgres and SQLite.
fn expires_at_index_sql(table: &str) -> String {
    format!(
        r#"CREATE INDEX IF NOT EXISTS "idx_{table}_expires_at" ON "{table}" (expires_at) WHERE expires_at IS NOT NULL"#
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::{PostgresQueryBuilder, SqliteQueryBuilder};

    use super::*;

    #[test]
    fn postgres_table_ddl() {
        let sql = table_statement("whatsapp_sessions").to_string(PostgresQueryBuilder);
        assert!(sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "whatsapp_sessions""#));
        assert!(sql.contains(r#""session_id" varchar(255) NOT NULL PRIMARY KEY"#));
        assert!(sql.contains(r#""session_data" bytea NOT NULL"#));
        assert!(sql.contains(r#""metadata" jsonb DEFAULT '{}'"#));
        assert!(sql.contains(r#""expires_at" timestamp with time zone NULL"#));
    }

    #[test]
    fn sqlite_table_ddl() {
        let sql = table_statement("whatsapp_sessions").to_string(SqliteQueryBuilder);
        assert!(sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "whatsapp_sessions""#));
        assert!(sql.contains(r#""session_data" blob NOT NULL"#));
        assert!(sql.contains(r#""metadata" jsonb_text DEFAULT '{}'"#));
        assert!(sql.contains(
            r#""created_at" timestamp_with_timezone_text DEFAULT CURRENT_TIMESTAMP"#
        ));
        assert!(sql.contains(
            r#""updated_at" timestamp_with_timezone_text DEFAULT CURRENT_TIMESTAMP"#
        ));
        assert!(sql.contains(r#""expires_at" timestamp_with_timezone_text NULL"#));
    }

    #[test]
    fn index_ddl() {
        let sql = updated_at_index("s").to_string(PostgresQueryBuilder);
        assert!(sql.starts_with(r#"CREATE INDEX IF NOT EXISTS "idx_s_updated_at""#));
        assert!(sql.contains(r#"ON "s" ("updated_at")"#));
        assert_eq!(
            expires_at_index_sql("s"),
            r#"CREATE INDEX IF NOT EXISTS "idx_s_expires_at" ON "s" (expires_at) WHERE expires_at IS NOT NULL"#
        );
    }
}
