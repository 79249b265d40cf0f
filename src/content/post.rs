//! Post model

use chrono::NaiveDate;
use serde::Serialize;
use std::ops::Deref;
use std::path::PathBuf;

use super::schema::PostData;

/// A validated blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Collection key
    pub id: String,

    /// Source file path, relative to the collection base
    pub file_path: PathBuf,

    /// Validated front-matter
    #[serde(flatten)]
    pub data: PostData,

    /// Markdown body after the front-matter block
    #[serde(skip)]
    pub body: String,
}

impl Post {
    pub fn new(id: String, file_path: PathBuf, data: PostData, body: String) -> Self {
        Self {
            id,
            file_path,
            data,
            body,
        }
    }

    /// Publication date without the time component
    pub fn calendar_date(&self) -> NaiveDate {
        self.data.calendar_date()
    }

    /// Site-relative URL path, e.g. `posts/2024/hello/`
    pub fn path(&self) -> String {
        format!("posts/{}/", self.id)
    }
}

impl Deref for Post {
    type Target = PostData;

    fn deref(&self) -> &PostData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::Category;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_post_fields() {
        let data = PostData {
            title: "Hello".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            category: Category::Dev,
            excerpt: None,
            cover: None,
            draft: false,
            slug: None,
        };
        let post = Post::new(
            "2024/hello".to_string(),
            PathBuf::from("2024/hello.md"),
            data,
            "Body".to_string(),
        );

        assert_eq!(post.title, "Hello");
        assert_eq!(post.category, Category::Dev);
        assert_eq!(post.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(post.path(), "posts/2024/hello/");

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], "2024/hello");
        assert_eq!(json["category"], "dev");
        assert_eq!(json["draft"], false);
        assert!(json.get("body").is_none());
    }
}
