//! List site content

use anyhow::Result;

use crate::consts::PAGINATION;
use crate::content::Post;
use crate::helpers::{page_url, paginate, url_for, PageSlice};
use crate::Site;

/// Options for `list`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Include drafts
    pub drafts: bool,
    /// 1-based page; `None` lists everything
    pub page: Option<usize>,
    pub json: bool,
}

/// List site content by type
pub fn run(site: &Site, content_type: &str, options: &ListOptions) -> Result<()> {
    let collection = site.load_posts()?;

    match content_type {
        "post" | "posts" => {
            let posts = if options.drafts {
                collection.sorted_by_date()
            } else {
                collection.published()
            };
            let (posts, slice) = select_page(&posts, options.page)?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }

            if let Some(slice) = slice {
                println!(
                    "Page {}/{} ({})",
                    slice.current,
                    slice.total,
                    listing_url(site, slice.current)
                );
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {}", format_post(site, post));
            }
        }
        "category" | "categories" => {
            let groups = collection.by_category();

            if options.json {
                let counts: indexmap::IndexMap<_, _> =
                    groups.iter().map(|(c, posts)| (c.as_str(), posts.len())).collect();
                println!("{}", serde_json::to_string_pretty(&counts)?);
                return Ok(());
            }

            println!("Categories ({}):", groups.len());
            for (category, posts) in &groups {
                println!("  {} ({})", category, posts.len());
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}

/// Restrict `posts` to one page of `PAGINATION.per_page` posts
fn select_page<'a>(
    posts: &[&'a Post],
    page: Option<usize>,
) -> Result<(Vec<&'a Post>, Option<PageSlice>)> {
    let Some(page) = page else {
        return Ok((posts.to_vec(), None));
    };

    let pages = paginate(posts.len(), PAGINATION.per_page);
    let total = pages.len();
    let slice = pages
        .into_iter()
        .find(|p| p.current == page)
        .ok_or_else(|| anyhow::anyhow!("Page {} out of range (1..={})", page, total))?;
    Ok((slice.items(posts).to_vec(), Some(slice)))
}

fn format_post(site: &Site, post: &Post) -> String {
    let draft = if post.draft { " (draft)" } else { "" };
    format!(
        "{} - {} [{}] {}{}",
        post.calendar_date().format("%Y-%m-%d"),
        post.title,
        post.category,
        url_for(&site.config, &post.path()),
        draft
    )
}

/// URL of a blog listing page
fn listing_url(site: &Site, page: usize) -> String {
    page_url(&site.config, "blog", page)
}
