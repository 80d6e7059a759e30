use sqlx::{SqliteConnection, SqlitePool};

use crate::models::Tag;

pub struct TagRepository;

impl TagRepository {
    /// Get a tag by name, creating it if missing (connect-or-create).
    /// Runs on a connection so the caller can group it with the item
    /// write in one transaction.
    pub async fn get_or_create(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<Tag, sqlx::Error> {
        sqlx::query("INSERT INTO tags (name) VALUES ($1) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(&mut *conn)
            .await?;

        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE name = $1")
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;

        Ok(row.into())
    }

    /// Link a tag to an item
    pub async fn link(
        conn: &mut SqliteConnection,
        item_id: i64,
        tag_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT OR IGNORE INTO item_tags (item_id, tag_id) VALUES ($1, $2)")
            .bind(item_id)
            .bind(tag_id)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Remove all tag links for an item
    pub async fn unlink_all(
        conn: &mut SqliteConnection,
        item_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM item_tags WHERE item_id = $1")
            .bind(item_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Get the tags attached to an item
    pub async fn get_by_item(pool: &SqlitePool, item_id: i64) -> Result<Vec<Tag>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT tags.id, tags.name FROM tags
            JOIN item_tags ON item_tags.tag_id = tags.id
            WHERE item_tags.item_id = $1
            ORDER BY tags.name
            "#,
        )
        .bind(item_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get the distinct tags used by items in a collection
    pub async fn get_by_collection(
        pool: &SqlitePool,
        collection_id: i64,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT DISTINCT tags.id, tags.name FROM tags
            JOIN item_tags ON item_tags.tag_id = tags.id
            JOIN items ON items.id = item_tags.item_id
            WHERE items.collection_id = $1
            ORDER BY tags.name
            "#,
        )
        .bind(collection_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
