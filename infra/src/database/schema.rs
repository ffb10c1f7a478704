//! Table bootstrap for the document collections

use aging_core::domain::entities::{Batch, Document, Measurement, Spirit, User, Vessel};
use sqlx::MySqlPool;

use crate::InfrastructureError;

/// DDL for a plain collection table
pub(crate) fn collection_table_ddl(collection: &str) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {collection} (
            id CHAR(36) NOT NULL PRIMARY KEY,
            created_at DATETIME(6) NOT NULL,
            document JSON NOT NULL,
            INDEX idx_{collection}_created_at (created_at)
        )
        "#
    )
}

/// Users carry a unique email derived from the stored document
fn users_table_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {users} (
            id CHAR(36) NOT NULL PRIMARY KEY,
            created_at DATETIME(6) NOT NULL,
            document JSON NOT NULL,
            email VARCHAR(255)
                AS (JSON_UNQUOTE(JSON_EXTRACT(document, '$.email'))) STORED,
            UNIQUE KEY uk_users_email (email),
            INDEX idx_users_created_at (created_at)
        )
        "#,
        users = User::COLLECTION
    )
}

/// Create every collection table that does not exist yet
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    let statements = [
        users_table_ddl(),
        collection_table_ddl(Spirit::COLLECTION),
        collection_table_ddl(Batch::COLLECTION),
        collection_table_ddl(Vessel::COLLECTION),
        collection_table_ddl(Measurement::COLLECTION),
    ];

    for statement in statements.iter() {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!(tables = statements.len(), "Database schema ensured");
    Ok(())
}
