//! Build configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::consts::get_base;

/// Rendering extensions enabled for the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// Markdown with embedded components
    Mdx,
    Sitemap,
    /// Interactive components
    Svelte,
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Integration::Mdx => "mdx",
            Integration::Sitemap => "sitemap",
            Integration::Svelte => "svelte",
        };
        f.write_str(name)
    }
}

/// Static build declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Site origin, e.g. `https://example.github.io`
    pub site: String,
    /// Path prefix applied to every generated URL
    pub base: String,
    pub integrations: Vec<Integration>,
    /// Posts directory, relative to the site root
    pub content_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            site: "https://slesaad.github.io".to_string(),
            base: "/squiggly-lines".to_string(),
            integrations: vec![Integration::Mdx, Integration::Sitemap, Integration::Svelte],
            content_dir: "src/content/posts".to_string(),
        }
    }
}

impl BuildConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let config: BuildConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid build configuration in {:?}", path))?;
        tracing::debug!("Loaded build configuration from {:?}", path);
        Ok(config)
    }

    /// The configured base path, ending with a single `/`
    pub fn base_url(&self) -> String {
        get_base(&self.base)
    }

    /// Origin joined with the normalized base
    pub fn site_url(&self) -> String {
        format!("{}{}", self.site.trim_end_matches('/'), self.base_url())
    }

    pub fn has_integration(&self, integration: Integration) -> bool {
        self.integrations.contains(&integration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.site, "https://slesaad.github.io");
        assert_eq!(config.base_url(), "/squiggly-lines/");
        assert_eq!(config.site_url(), "https://slesaad.github.io/squiggly-lines/");
        assert!(config.has_integration(Integration::Mdx));
        assert!(config.has_integration(Integration::Sitemap));
        assert!(config.has_integration(Integration::Svelte));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
site: https://example.com/
base: /blog/
integrations:
  - sitemap
"#;
        let config: BuildConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url(), "/blog/");
        assert_eq!(config.site_url(), "https://example.com/blog/");
        assert_eq!(config.integrations, vec![Integration::Sitemap]);
        assert!(!config.has_integration(Integration::Mdx));
        assert_eq!(config.content_dir, "src/content/posts");
    }

    #[test]
    fn test_unknown_integration_rejected() {
        let yaml = "integrations: [react]\n";
        assert!(serde_yaml::from_str::<BuildConfig>(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        fs::write(&path, "base: /portfolio\n").unwrap();

        let config = BuildConfig::load(&path).unwrap();
        assert_eq!(config.base, "/portfolio");
        assert_eq!(config.site, "https://slesaad.github.io");

        fs::write(&path, "base: [unclosed\n").unwrap();
        assert!(BuildConfig::load(&path).is_err());
    }
}
