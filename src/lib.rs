//! squiggly-lines: content schema, loader and site constants for the
//! squiggly lines blog
//!
//! Posts are markdown files with YAML front-matter. Every file under the
//! content directory is validated at load time and a single invalid file
//! fails the whole load.

pub mod commands;
pub mod config;
pub mod consts;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the optional build configuration file at the site root
pub const CONFIG_FILE: &str = "site.yml";

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Build configuration
    pub config: config::BuildConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::BuildConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            config::BuildConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: PathBuf, config: config::BuildConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Load and validate every post
    pub fn load_posts(&self) -> Result<content::Collection> {
        let def = content::posts_collection(&self.base_dir, &self.config.content_dir);
        let loader = content::ContentLoader::new(def)?;
        Ok(loader.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config, config::BuildConfig::default());
        assert_eq!(site.content_dir, dir.path().join("src/content/posts"));
        assert!(site.load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_site_loads_posts_from_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "content_dir: posts\n").unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(
            dir.path().join("posts/hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-15\ncategory: dev\n---\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let posts = site.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts.get("hello").unwrap().category, consts::Category::Dev);
    }

    #[test]
    fn test_site_load_fails_on_invalid_post() {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("src/content/posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("x.md"),
            "---\ntitle: X\ndate: 2024-01-15\ncategory: unknown\n---\n",
        )
        .unwrap();

        let err = Site::new(dir.path()).unwrap().load_posts().unwrap_err();
        let content_err = err.downcast_ref::<content::ContentError>().unwrap();
        assert_eq!(content_err.field_errors()[0].field, "category");
    }
}
