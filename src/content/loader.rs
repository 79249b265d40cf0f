//! Content loader - discovers and validates posts under a collection base

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::ContentError;
use super::{schema, Collection, FrontMatter, Post};

/// Default pattern for post files
pub const POSTS_PATTERN: &str = "**/*.{md,mdx}";

/// Where a collection lives and which files belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDef {
    pub base: PathBuf,
    pub pattern: String,
}

impl CollectionDef {
    pub fn new<P: Into<PathBuf>>(base: P, pattern: &str) -> Self {
        Self {
            base: base.into(),
            pattern: pattern.to_string(),
        }
    }
}

/// Loads a collection, failing on the first invalid file
pub struct ContentLoader {
    def: CollectionDef,
    patterns: Vec<Pattern>,
}

impl ContentLoader {
    pub fn new(def: CollectionDef) -> Result<Self, ContentError> {
        let patterns = expand_braces(&def.pattern)
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| ContentError::Pattern {
                    pattern: def.pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { def, patterns })
    }

    /// Relative paths of every file matching the pattern
    ///
    /// Any entry the walk cannot read fails discovery.
    pub fn discover(&self) -> Result<Vec<PathBuf>, ContentError> {
        let base = &self.def.base;
        if !base.is_dir() {
            tracing::warn!("Content directory {:?} does not exist", base);
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(base).follow_links(true) {
            let entry = entry.map_err(|source| ContentError::Walk {
                path: source.path().unwrap_or(base.as_path()).to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(base) {
                if self.matches(relative) {
                    found.push(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn matches(&self, relative: &Path) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(relative, options))
    }

    /// Discover and validate every file
    pub fn load(&self) -> Result<Collection, ContentError> {
        let mut collection = Collection::default();

        for relative in self.discover()? {
            let post = self.load_post(&relative)?;
            if let Some(existing) = collection.get(&post.id) {
                return Err(ContentError::DuplicateId {
                    id: post.id.clone(),
                    first: existing.file_path.clone(),
                    second: post.file_path,
                });
            }
            collection.insert(post);
        }

        tracing::info!(
            "Loaded {} posts from {:?}",
            collection.len(),
            self.def.base
        );
        Ok(collection)
    }

    /// Load a single post from a path relative to the base
    fn load_post(&self, relative: &Path) -> Result<Post, ContentError> {
        let full_path = self.def.base.join(relative);
        let content = fs::read_to_string(&full_path).map_err(|source| ContentError::Io {
            path: full_path.clone(),
            source,
        })?;

        let (fm, body) =
            FrontMatter::parse(&content).map_err(|message| ContentError::FrontMatter {
                path: full_path.clone(),
                message,
            })?;

        let data = schema::validate(&fm).map_err(|errors| ContentError::Validation {
            path: full_path.clone(),
            errors,
        })?;

        let id = data
            .slug
            .clone()
            .unwrap_or_else(|| id_from_path(relative));
        tracing::debug!("Loaded post '{}' from {:?}", id, relative);

        Ok(Post::new(id, relative.to_path_buf(), data, body.to_string()))
    }
}

/// Derive a collection id: extension dropped, each segment slugified
pub fn id_from_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(slug::slugify)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand `{a,b,...}` groups, including nested ones, recursively
///
/// `**/*.{md,mdx}` -> [`**/*.md`, `**/*.mdx`]. An unbalanced group is kept
/// literally.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let i = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(i),
            _ => {}
        }
    }
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|w| {
            let alt = &pattern[w[0] + 1..w[1]];
            expand_braces(&format!("{}{}{}", prefix, alt, suffix))
        })
        .collect()
}
