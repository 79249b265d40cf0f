//! URL helper functions

use crate::config::BuildConfig;

/// Generate a URL under the base path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/posts/hello/") // -> "/squiggly-lines/posts/hello/"
/// ```
pub fn url_for(config: &BuildConfig, path: &str) -> String {
    format!("{}{}", config.base_url(), path.trim_start_matches('/'))
}

/// Generate a full URL including the site origin
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "about/") // -> "https://slesaad.github.io/squiggly-lines/about/"
/// ```
pub fn full_url_for(config: &BuildConfig, path: &str) -> String {
    format!("{}{}", config.site.trim_end_matches('/'), url_for(config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> BuildConfig {
        BuildConfig {
            site: "https://example.com/".to_string(),
            base: "/blog".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/blog/about/");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_url_for_root_base() {
        let config = BuildConfig {
            base: "/".to_string(),
            ..Default::default()
        };
        assert_eq!(url_for(&config, "/posts/x/"), "/posts/x/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/about/"),
            "https://example.com/blog/about/"
        );
    }
}
