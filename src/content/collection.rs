//! Validated post collection and read-only queries over it

use indexmap::IndexMap;

use super::Post;
use crate::consts::Category;

/// Posts keyed by id. Iteration follows discovery order, which carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    posts: IndexMap<String, Post>,
}

impl Collection {
    pub(crate) fn insert(&mut self, post: Post) {
        self.posts.insert(post.id.clone(), post);
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    /// Non-draft posts, newest first
    pub fn published(&self) -> Vec<&Post> {
        sort_newest_first(self.iter().filter(|p| !p.draft).collect())
    }

    /// All posts including drafts, newest first
    pub fn sorted_by_date(&self) -> Vec<&Post> {
        sort_newest_first(self.iter().collect())
    }

    /// Non-draft posts grouped by category, every category present
    pub fn by_category(&self) -> IndexMap<Category, Vec<&Post>> {
        let mut groups: IndexMap<Category, Vec<&Post>> =
            Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        for post in self.published() {
            groups.entry(post.category).or_default().push(post);
        }
        groups
    }
}

/// Ties on date fall back to id so output is stable
fn sort_newest_first(mut posts: Vec<&Post>) -> Vec<&Post> {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    posts
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Post;
    type IntoIter = indexmap::map::Values<'a, String, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.values()
    }
}
