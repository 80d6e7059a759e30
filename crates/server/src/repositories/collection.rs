use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{Collection, CreateCollection};

/// Common SELECT fields for collection queries
const SELECT_COLLECTION: &str = r#"
    SELECT id, created_at, updated_at, name, description
    FROM collections
"#;

pub struct CollectionRepository;

impl CollectionRepository {
    /// Create a new collection
    pub async fn create(
        pool: &SqlitePool,
        data: CreateCollection,
    ) -> Result<Collection, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO collections (name, description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a collection by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_COLLECTION);
        let row = sqlx::query_as::<_, CollectionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all collections, newest first
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Collection>, sqlx::Error> {
        let query = format!("{} ORDER BY created_at DESC, id DESC", SELECT_COLLECTION);
        let rows = sqlx::query_as::<_, CollectionRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Delete a collection by ID. Runs on a connection so the caller can
    /// group it with the item deletes in one transaction.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct CollectionRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    description: Option<String>,
}

impl From<CollectionRow> for Collection {
    fn from(row: CollectionRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            name: row.name,
            description: row.description,
        }
    }
}
