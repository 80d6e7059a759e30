mod collection;
mod item;
mod metadata;

pub use collection::{CollectionError, CollectionService};
pub use item::{ItemError, ItemService};
pub use metadata::{MetadataError, MetadataService};
