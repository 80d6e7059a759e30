mod collection;
mod common;
mod item;
mod tag;

pub use collection::*;
pub use common::*;
pub use item::*;
pub use tag::*;
