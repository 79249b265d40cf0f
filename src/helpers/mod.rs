//! Helper functions for rendering code
//!
//! URL generation against the configured base path and pagination over
//! post lists.

mod pagination;
mod url;

pub use pagination::*;
pub use url::*;
