//! Site-wide constants: identity strings, social links, pagination and the
//! closed set of post categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display strings identifying the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub author: &'static str,
    pub company: &'static str,
}

/// Outbound profile links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub instagram: &'static str,
    pub github: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub per_page: usize,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "squiggly lines",
    title: "squiggly lines",
    tagline: "perfectly imperfect",
    author: "slesa",
    company: "@saanostory ink.",
};

pub const SOCIAL: SocialLinks = SocialLinks {
    instagram: "https://www.instagram.com/saanostory/",
    github: "https://github.com/slesaad/",
    email: "mailto:slesaad@gmail.com",
    website: "https://slesa.com.np",
    linkedin: "https://linkedin.com/in/slesaad",
};

pub const PAGINATION: Pagination = Pagination { per_page: 8 };

/// Post category. The schema and [`CATEGORIES`] are both derived from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Art,
    Dev,
    Make,
    Misc,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [Category::Art, Category::Dev, Category::Make, Category::Misc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Art => "art",
            Category::Dev => "dev",
            Category::Make => "make",
            Category::Misc => "misc",
        }
    }
}

/// Category names, in the same order as [`Category::ALL`]
pub const CATEGORIES: [&str; 4] = [
    Category::ALL[0].as_str(),
    Category::ALL[1].as_str(),
    Category::ALL[2].as_str(),
    Category::ALL[3].as_str(),
];

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of [`CATEGORIES`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}', expected one of: {}",
            self.0,
            CATEGORIES.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Normalize a base path so it ends with exactly one `/`
///
/// # Examples
/// ```
/// use squiggly_lines::consts::get_base;
/// assert_eq!(get_base("/a/b"), "/a/b/");
/// assert_eq!(get_base("/a/b/"), "/a/b/");
/// ```
pub fn get_base(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_base_appends_separator() {
        assert_eq!(get_base("/a/b"), "/a/b/");
        assert_eq!(get_base("/squiggly-lines"), "/squiggly-lines/");
    }

    #[test]
    fn test_get_base_keeps_single_separator() {
        assert_eq!(get_base("/a/b/"), "/a/b/");
        assert_eq!(get_base("/a/b///"), "/a/b/");
        assert_eq!(get_base("/"), "/");
        assert_eq!(get_base(""), "/");
    }

    #[test]
    fn test_get_base_idempotent() {
        for input in ["", "/", "/a", "/a/", "a/b", "/a/b//", "relative"] {
            let once = get_base(input);
            assert!(once.ends_with('/'));
            assert!(!once.ends_with("//"));
            assert_eq!(get_base(&once), once);
        }
    }

    #[test]
    fn test_categories_match_enum() {
        assert_eq!(CATEGORIES, ["art", "dev", "make", "misc"]);
        for name in CATEGORIES {
            let category: Category = name.parse().unwrap();
            assert_eq!(category.as_str(), name);
        }
        assert!("unknown".parse::<Category>().is_err());
        assert!("Dev".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Make).unwrap();
        assert_eq!(json, "\"make\"");
        let parsed: Category = serde_yaml::from_str("art").unwrap();
        assert_eq!(parsed, Category::Art);
    }

    #[test]
    fn test_site_constants() {
        assert_eq!(SITE.name, "squiggly lines");
        assert_eq!(SITE.tagline, "perfectly imperfect");
        assert_eq!(PAGINATION.per_page, 8);
        assert!(SOCIAL.email.starts_with("mailto:"));
    }
}
