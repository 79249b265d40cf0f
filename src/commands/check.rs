//! Validate site content

use anyhow::Result;

use crate::Site;

/// Load every post, failing on the first invalid file. Returns the post count.
pub fn run(site: &Site) -> Result<usize> {
    let start = std::time::Instant::now();
    let posts = site.load_posts()?;

    let drafts = posts.iter().filter(|p| p.draft).count();
    tracing::info!(
        "Validated {} posts ({} drafts) in {:.2}s",
        posts.len(),
        drafts,
        start.elapsed().as_secs_f64()
    );

    Ok(posts.len())
}
