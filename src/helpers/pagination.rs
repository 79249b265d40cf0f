//! Pagination over ordered post lists

use serde::Serialize;

use super::url::url_for;
use crate::config::BuildConfig;

/// One page of a paginated list. Page numbers are 1-based; `prev`/`next` are 0 when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlice {
    pub per_page: usize,
    pub total: usize,
    pub current: usize,
    /// Index range into the paginated list
    pub start: usize,
    pub end: usize,
    pub prev: usize,
    pub next: usize,
}

impl PageSlice {
    pub fn items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start..self.end]
    }

    pub fn has_prev(&self) -> bool {
        self.prev > 0
    }

    pub fn has_next(&self) -> bool {
        self.next > 0
    }
}

/// Split `len` items into pages of `per_page`. An empty list still has one page.
pub fn paginate(len: usize, per_page: usize) -> Vec<PageSlice> {
    let per_page = per_page.max(1);
    let total = len.div_ceil(per_page).max(1);

    (1..=total)
        .map(|current| {
            let start = ((current - 1) * per_page).min(len);
            let end = (start + per_page).min(len);
            PageSlice {
                per_page,
                total,
                current,
                start,
                end,
                prev: current.saturating_sub(1),
                next: if current < total { current + 1 } else { 0 },
            }
        })
        .collect()
}

/// URL of page `page` under `prefix`; the first page has no number
pub fn page_url(config: &BuildConfig, prefix: &str, page: usize) -> String {
    let prefix = prefix.trim_matches('/');
    let path = match (prefix.is_empty(), page <= 1) {
        (true, true) => String::new(),
        (true, false) => format!("{}/", page),
        (false, true) => format!("{}/", prefix),
        (false, false) => format!("{}/{}/", prefix, page),
    };
    url_for(config, &path)
}
