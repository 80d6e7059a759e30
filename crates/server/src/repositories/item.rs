use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{CreateItem, Item, ItemMetadata};

/// Common SELECT fields for item queries
const SELECT_ITEM: &str = r#"
    SELECT id, created_at, updated_at, collection_id, title, description, url, type, metadata
    FROM items
"#;

pub struct ItemRepository;

impl ItemRepository {
    /// Create a new item in a collection. Runs on a connection so the
    /// caller can group it with tag writes in one transaction.
    pub async fn create(
        conn: &mut SqliteConnection,
        collection_id: i64,
        data: &CreateItem,
    ) -> Result<Item, sqlx::Error> {
        let metadata_json = data
            .metadata
            .as_ref()
            .and_then(|m| serde_json::to_string(m).ok());

        let result = sqlx::query(
            r#"
            INSERT INTO items (collection_id, title, description, url, type, metadata)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(collection_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.url)
        .bind(data.kind.as_str())
        .bind(&metadata_json)
        .fetch_one(&mut *conn)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        let query = format!("{} WHERE id = $1", SELECT_ITEM);
        let row = sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        Ok(row.into())
    }

    /// Get all items in a collection, newest first
    pub async fn get_by_collection(
        pool: &SqlitePool,
        collection_id: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "{} WHERE collection_id = $1 ORDER BY created_at DESC, id DESC",
            SELECT_ITEM
        );
        let rows = sqlx::query_as::<_, ItemRow>(&query)
            .bind(collection_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get items in a collection carrying a given tag, newest first
    pub async fn get_by_collection_and_tag(
        pool: &SqlitePool,
        collection_id: i64,
        tag: &str,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            r#"{} WHERE collection_id = $1 AND id IN (
                SELECT item_tags.item_id FROM item_tags
                JOIN tags ON tags.id = item_tags.tag_id
                WHERE tags.name = $2
            ) ORDER BY created_at DESC, id DESC"#,
            SELECT_ITEM
        );
        let rows = sqlx::query_as::<_, ItemRow>(&query)
            .bind(collection_id)
            .bind(tag)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Delete an item by ID
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all items in a collection along with their tag links
    pub async fn delete_by_collection(
        conn: &mut SqliteConnection,
        collection_id: i64,
    ) -> Result<u64, sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM item_tags WHERE item_id IN (
                SELECT id FROM items WHERE collection_id = $1
            )
            "#,
        )
        .bind(collection_id)
        .execute(&mut *conn)
        .await?;

        let result = sqlx::query("DELETE FROM items WHERE collection_id = $1")
            .bind(collection_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    collection_id: i64,
    title: String,
    description: Option<String>,
    url: String,
    #[sqlx(rename = "type")]
    kind: String,
    metadata: Option<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        let metadata: Option<ItemMetadata> = row
            .metadata
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());

        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            collection_id: row.collection_id,
            title: row.title,
            description: row.description,
            url: row.url,
            kind: row.kind.parse().unwrap_or_default(),
            metadata,
        }
    }
}
