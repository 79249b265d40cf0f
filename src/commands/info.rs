//! Print site constants and build configuration

use anyhow::Result;
use serde::Serialize;

use crate::config::{BuildConfig, Integration};
use crate::consts::{Pagination, SiteInfo, SocialLinks, CATEGORIES, PAGINATION, SITE, SOCIAL};
use crate::Site;

#[derive(Debug, Serialize)]
struct Info<'a> {
    site: SiteInfo,
    social: SocialLinks,
    pagination: Pagination,
    categories: [&'static str; 4],
    build: &'a BuildConfig,
    base_url: String,
}

pub fn run(site: &Site, json: bool) -> Result<()> {
    let info = Info {
        site: SITE,
        social: SOCIAL,
        pagination: PAGINATION,
        categories: CATEGORIES,
        build: &site.config,
        base_url: site.config.base_url(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", render_text(&info));
    }
    Ok(())
}

fn render_text(info: &Info<'_>) -> String {
    let integrations = info
        .build
        .integrations
        .iter()
        .map(Integration::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!("{} - {}\n", info.site.title, info.site.tagline));
    out.push_str(&format!("  author:       {} ({})\n", info.site.author, info.site.company));
    out.push_str(&format!("  site:         {}\n", info.build.site_url()));
    out.push_str(&format!("  base:         {}\n", info.base_url));
    out.push_str(&format!("  integrations: {}\n", integrations));
    out.push_str(&format!("  categories:   {}\n", info.categories.join(", ")));
    out.push_str(&format!("  per page:     {}\n", info.pagination.per_page));
    out.push_str("Links:\n");
    for (name, url) in [
        ("instagram", info.social.instagram),
        ("github", info.social.github),
        ("email", info.social.email),
        ("website", info.social.website),
        ("linkedin", info.social.linkedin),
    ] {
        out.push_str(&format!("  {:<10} {}\n", name, url));
    }
    out
}
