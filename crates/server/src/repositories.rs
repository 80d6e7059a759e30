mod collection;
mod item;
mod tag;

pub use collection::CollectionRepository;
pub use item::ItemRepository;
pub use tag::TagRepository;
