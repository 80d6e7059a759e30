use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{Collection, CollectionWithItems, CreateCollection, ItemWithTags};
use crate::repositories::{CollectionRepository, ItemRepository, TagRepository};

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Collection not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
}

/// Service for managing collections of curated items
pub struct CollectionService {
    db: SqlitePool,
}

impl CollectionService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a new collection
    pub async fn create(&self, data: CreateCollection) -> Result<Collection, CollectionError> {
        if data.name.trim().is_empty() {
            return Err(CollectionError::Validation("Name is required".to_string()));
        }

        Ok(CollectionRepository::create(&self.db, data).await?)
    }

    /// Get all collections, newest first
    pub async fn get_all(&self) -> Result<Vec<Collection>, CollectionError> {
        Ok(CollectionRepository::get_all(&self.db).await?)
    }

    /// Get a collection by ID with its items and their tags
    pub async fn get_with_items(&self, id: i64) -> Result<CollectionWithItems, CollectionError> {
        let collection = CollectionRepository::get_by_id(&self.db, id)
            .await?
            .ok_or(CollectionError::NotFound)?;

        let items = ItemRepository::get_by_collection(&self.db, id).await?;

        let mut with_tags = Vec::with_capacity(items.len());
        for item in items {
            let tags = TagRepository::get_by_item(&self.db, item.id).await?;
            with_tags.push(ItemWithTags { item, tags });
        }

        Ok(CollectionWithItems {
            collection,
            items: with_tags,
        })
    }

    /// Delete a collection along with its items and tag links
    pub async fn delete(&self, id: i64) -> Result<(), CollectionError> {
        let mut tx = self.db.begin().await?;

        // Items and their tag links go first (foreign key constraints)
        ItemRepository::delete_by_collection(&mut tx, id).await?;
        let deleted = CollectionRepository::delete(&mut tx, id).await?;

        tx.commit().await?;

        if !deleted {
            return Err(CollectionError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateItem, ItemType};
    use crate::services::ItemService;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect to in-memory sqlite");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("run migrations");

        pool
    }

    fn create_collection(name: &str) -> CreateCollection {
        CreateCollection {
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_and_list_collections() {
        let service = CollectionService::new(test_pool().await);

        let first = service.create(create_collection("reading")).await.unwrap();
        let second = service.create(create_collection("videos")).await.unwrap();

        assert_eq!(first.name, "reading");
        assert_eq!(first.description, None);

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest first
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let service = CollectionService::new(test_pool().await);

        let result = service.create(create_collection("   ")).await;
        assert!(matches!(result, Err(CollectionError::Validation(_))));
    }

    #[tokio::test]
    async fn get_with_items_returns_items_and_tags() {
        let pool = test_pool().await;
        let collections = CollectionService::new(pool.clone());
        let items = ItemService::new(pool);

        let collection = collections.create(create_collection("mixed")).await.unwrap();
        items
            .create(
                collection.id,
                CreateItem {
                    title: "Cats".to_string(),
                    description: None,
                    url: "https://example.com/cats".to_string(),
                    kind: ItemType::Article,
                    tags: vec!["pets".to_string()],
                    metadata: None,
                },
            )
            .await
            .unwrap();

        let with_items = collections.get_with_items(collection.id).await.unwrap();
        assert_eq!(with_items.collection.id, collection.id);
        assert_eq!(with_items.items.len(), 1);
        assert_eq!(with_items.items[0].item.title, "Cats");
        assert_eq!(with_items.items[0].tags[0].name, "pets");
    }

    #[tokio::test]
    async fn get_with_items_unknown_collection_is_not_found() {
        let service = CollectionService::new(test_pool().await);

        let result = service.get_with_items(999).await;
        assert!(matches!(result, Err(CollectionError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_collection_and_items() {
        let pool = test_pool().await;
        let collections = CollectionService::new(pool.clone());
        let items = ItemService::new(pool.clone());

        let collection = collections.create(create_collection("gone")).await.unwrap();
        items
            .create(
                collection.id,
                CreateItem {
                    title: "Link".to_string(),
                    description: None,
                    url: "https://example.com".to_string(),
                    kind: ItemType::Other,
                    tags: vec!["x".to_string()],
                    metadata: None,
                },
            )
            .await
            .unwrap();

        collections.delete(collection.id).await.unwrap();

        assert!(matches!(
            collections.get_with_items(collection.id).await,
            Err(CollectionError::NotFound)
        ));
        let orphans = crate::repositories::ItemRepository::get_by_collection(&pool, collection.id)
            .await
            .unwrap();
        assert!(orphans.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_collection_is_not_found() {
        let service = CollectionService::new(test_pool().await);

        let result = service.delete(42).await;
        assert!(matches!(result, Err(CollectionError::NotFound)));
    }
}
