mod collections;
mod items;
mod metadata;

pub use collections::*;
pub use items::*;
pub use metadata::*;
