use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;
use crate::services::{CollectionService, ItemService, MetadataService};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub collections: Arc<CollectionService>,
    pub items: Arc<ItemService>,
    pub metadata: Arc<MetadataService>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Result<Self, reqwest::Error> {
        let collections = Arc::new(CollectionService::new(db.clone()));
        let items = Arc::new(ItemService::new(db.clone()));
        let metadata = Arc::new(MetadataService::new()?);

        Ok(Self {
            db,
            config: Arc::new(config),
            collections,
            items,
            metadata,
        })
    }
}
