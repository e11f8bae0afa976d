use crate::defaults;
use crate::error::{Error, Result};
use crate::href::check_absolute_url;
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    #[serde(default)]
    nav: Vec<Link>,
    #[serde(default)]
    social: Vec<Link>,
    /// Overlaid on the built-in icon set
    #[serde(default)]
    icons: IconMap,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    title: String,
    description: String,
    href: String,
    author: String,
    locale: String,
    #[serde(alias = "featuredPostCount")]
    featured_post_count: u32,
    #[serde(alias = "postsPerPage")]
    posts_per_page: u32,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    check_absolute_url(&raw.site.href, "site.href")?;

    if raw.site.posts_per_page == 0 {
        return Err(Error::ConfigParse(
            "'site.posts_per_page' must be at least 1".to_string(),
        ));
    }

    let site = Site {
        title: raw.site.title,
        description: raw.site.description,
        href: raw.site.href,
        author: raw.site.author,
        locale: raw.site.locale,
        featured_post_count: raw.site.featured_post_count,
        posts_per_page: raw.site.posts_per_page,
    };

    let mut icon_map = defaults::icon_map();
    icon_map.merge(raw.icons);

    Ok(SiteConfig {
        site,
        nav_links: raw.nav,
        social_links: raw.social,
        icon_map,
    })
}
