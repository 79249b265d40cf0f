//! Content module - post schema, front-matter parsing and collection loading

mod collection;
mod error;
mod frontmatter;
pub mod loader;
mod post;
pub mod schema;

use std::path::Path;

pub use collection::Collection;
pub use error::{ContentError, FieldError, FieldIssue};
pub use frontmatter::FrontMatter;
pub use loader::{CollectionDef, ContentLoader};
pub use post::Post;
pub use schema::PostData;

/// The posts collection of a site rooted at `site_root`
pub fn posts_collection<P: AsRef<Path>>(site_root: P, content_dir: &str) -> CollectionDef {
    CollectionDef::new(site_root.as_ref().join(content_dir), loader::POSTS_PATTERN)
}
