//! Built-in configuration for the bWrg3r site.
//!
//! These tables are what `site-kit` uses when no `site.toml` is given, and
//! what `site-kit init` seeds a new `site.toml` with.

use crate::types::{IconMap, Link, Site, SiteConfig};
use std::sync::LazyLock;

/// Site metadata as compile-time literals
pub struct SiteDefaults {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub author: &'static str,
    pub locale: &'static str,
    pub featured_post_count: u32,
    pub posts_per_page: u32,
}

pub const SITE: SiteDefaults = SiteDefaults {
    title: "bWrg3r",
    description: "We're bWrg3r, a CTF team from UTMCyberX",
    href: "https://bwrg3r.github.io/",
    author: "bwrg3r",
    locale: "en-US",
    featured_post_count: 2,
    posts_per_page: 3,
};

/// (href, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/blog", "blog"),
    ("/authors", "authors"),
    ("/about", "about"),
];

/// (href, label)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("https://github.com/bwrg3r", "GitHub"),
    (
        "https://mail.google.com/mail/?view=cm&fs=1&to=bwrg3r@gmail.com",
        "Email",
    ),
    ("/rss.xml", "RSS"),
];

/// (label, icon identifier)
pub const ICON_MAP: &[(&str, &str)] = &[
    ("Website", "lucide:globe"),
    ("GitHub", "lucide:github"),
    ("LinkedIn", "lucide:linkedin"),
    ("Twitter", "lucide:twitter"),
    ("Email", "lucide:mail"),
    ("RSS", "lucide:rss"),
];

static BUILTIN: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::default);

/// Process-wide built-in configuration, built on first access
pub fn builtin() -> &'static SiteConfig {
    &BUILTIN
}

impl From<&SiteDefaults> for Site {
    fn from(d: &SiteDefaults) -> Self {
        Site {
            title: d.title.to_string(),
            description: d.description.to_string(),
            href: d.href.to_string(),
            author: d.author.to_string(),
            locale: d.locale.to_string(),
            featured_post_count: d.featured_post_count,
            posts_per_page: d.posts_per_page,
        }
    }
}

pub(crate) fn links(table: &[(&str, &str)]) -> Vec<Link> {
    table
        .iter()
        .map(|(href, label)| Link::new(*href, *label))
        .collect()
}

pub(crate) fn icon_map() -> IconMap {
    ICON_MAP.iter().copied().collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site: Site::from(&SITE),
            nav_links: links(NAV_LINKS),
            social_links: links(SOCIAL_LINKS),
            icon_map: icon_map(),
        }
    }
}
