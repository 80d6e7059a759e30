//! Page metadata scraping library.
//!
//! Given raw HTML and the URL it came from, [`extract`] produces a
//! [`PageMetadata`] record: title, description, preview image, author,
//! publish date, site name and a [`PageType`] classification. Extraction is
//! a pure function with no I/O and never fails; a signal that is absent from
//! the markup simply yields an empty or `None` field.
//!
//! Matching is best-effort regex over the raw markup (meta tags and
//! OpenGraph properties), not a real HTML parse.

mod extract;
mod models;

pub use extract::extract;
pub use models::{PageMetadata, PageType};
