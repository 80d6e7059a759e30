use utoipa::OpenApi;

use crate::api::handlers::ScrapeRequest;
use crate::error::ErrorResponse;
use crate::models::{
    Collection, CollectionWithItems, CreateCollection, CreateItem, DataResponse, Item,
    ItemMetadata, ItemType, ItemWithTags, Tag,
};
use scrape::{PageMetadata, PageType};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curio API",
        version = "1.0.0"
    ),
    tags(
        (name = "collections", description = "Collection management endpoints"),
        (name = "items", description = "Item and tag endpoints"),
        (name = "metadata", description = "Page metadata scraping endpoints")
    ),
    components(schemas(
        Collection,
        CollectionWithItems,
        CreateCollection,
        CreateItem,
        DataResponse,
        ErrorResponse,
        Item,
        ItemMetadata,
        ItemType,
        ItemWithTags,
        Tag,
        PageMetadata,
        PageType,
        ScrapeRequest,
    ))
)]
pub struct ApiDoc;
