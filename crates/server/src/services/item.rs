use sqlx::SqlitePool;
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::models::{CreateItem, ItemWithTags, Tag};
use crate::repositories::{CollectionRepository, ItemRepository, TagRepository};

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Collection not found")]
    CollectionNotFound,
    #[error("Item not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
}

/// Service for managing items and their tags
pub struct ItemService {
    db: SqlitePool,
}

impl ItemService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create an item in a collection, connecting or creating its tags
    pub async fn create(
        &self,
        collection_id: i64,
        data: CreateItem,
    ) -> Result<ItemWithTags, ItemError> {
        if data.title.trim().is_empty() {
            return Err(ItemError::Validation("Title is required".to_string()));
        }
        if Url::parse(&data.url).is_err() {
            return Err(ItemError::Validation("Invalid URL".to_string()));
        }

        CollectionRepository::get_by_id(&self.db, collection_id)
            .await?
            .ok_or(ItemError::CollectionNotFound)?;

        // Item insert and tag links commit or roll back together
        let mut tx = self.db.begin().await?;
        let item = ItemRepository::create(&mut tx, collection_id, &data).await?;

        let mut tags = Vec::new();
        let mut seen = HashSet::new();
        for name in &data.tags {
            let name = name.trim();
            if name.is_empty() || !seen.insert(name.to_string()) {
                continue;
            }

            let tag = TagRepository::get_or_create(&mut tx, name).await?;
            TagRepository::link(&mut tx, item.id, tag.id).await?;
            tags.push(tag);
        }
        tx.commit().await?;

        Ok(ItemWithTags { item, tags })
    }

    /// Get a collection's items with their tags, optionally filtered by tag
    pub async fn get_by_collection(
        &self,
        collection_id: i64,
        tag: Option<&str>,
    ) -> Result<Vec<ItemWithTags>, ItemError> {
        let items = match tag {
            Some(tag) => {
                ItemRepository::get_by_collection_and_tag(&self.db, collection_id, tag).await?
            }
            None => ItemRepository::get_by_collection(&self.db, collection_id).await?,
        };

        let mut with_tags = Vec::with_capacity(items.len());
        for item in items {
            let tags = TagRepository::get_by_item(&self.db, item.id).await?;
            with_tags.push(ItemWithTags { item, tags });
        }

        Ok(with_tags)
    }

    /// Get the distinct tags used in a collection
    pub async fn get_collection_tags(&self, collection_id: i64) -> Result<Vec<Tag>, ItemError> {
        Ok(TagRepository::get_by_collection(&self.db, collection_id).await?)
    }

    /// Delete an item and its tag links
    pub async fn delete(&self, id: i64) -> Result<(), ItemError> {
        let mut tx = self.db.begin().await?;

        // Tag links go first (foreign key constraint)
        TagRepository::unlink_all(&mut tx, id).await?;
        let deleted = ItemRepository::delete(&mut tx, id).await?;

        tx.commit().await?;

        if !deleted {
            return Err(ItemError::NotFound);
        }

        Ok(())
    }
}
