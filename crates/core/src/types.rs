use crate::href::{HrefKind, classify};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub site: Site,
    /// Primary navigation, in render order
    pub nav_links: Vec<Link>,
    /// Outbound social/contact links, in render order
    pub social_links: Vec<Link>,
    pub icon_map: IconMap,
}

impl SiteConfig {
    /// Icon identifier for each social link, `None` where the map has no entry
    pub fn social_icons(&self) -> impl Iterator<Item = (&Link, Option<&str>)> {
        self.social_links
            .iter()
            .map(|link| (link, self.icon_map.icon_for(&link.label)))
    }
}

/// Global site metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub title: String,
    pub description: String,
    /// Canonical absolute URL of the site root
    pub href: String,
    pub author: String,
    /// Language-region tag, e.g. `en-US`
    pub locale: String,
    /// Number of posts shown in the featured section of the home page
    pub featured_post_count: u32,
    /// Posts per listing page, at least 1
    pub posts_per_page: u32,
}

impl Site {
    /// Number of listing pages needed for `total_posts`.
    ///
    /// Always at least 1 so an empty blog still gets its index page.
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = self.per_page();
        total_posts.div_ceil(per_page).max(1)
    }

    /// Post indices shown on 1-based `page`, or `None` if the page doesn't exist
    pub fn page_bounds(&self, page: usize, total_posts: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count(total_posts) {
            return None;
        }
        let per_page = self.per_page();
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total_posts);
        Some(start..end)
    }

    /// How many posts the featured section actually shows
    pub fn featured_count(&self, total_posts: usize) -> usize {
        (self.featured_post_count as usize).min(total_posts)
    }

    /// Resolve `path` against the site root.
    ///
    /// Absolute URLs pass through unchanged; everything else is joined to
    /// `href` with a single `/`.
    pub fn absolute_url(&self, path: &str) -> String {
        let path = path.trim();
        if classify(path).is_external() {
            return path.to_string();
        }
        let base = self.href.trim_end_matches('/');
        let path = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn per_page(&self) -> usize {
        // Loader rejects 0; guard anyway so arithmetic never divides by zero
        (self.posts_per_page as usize).max(1)
    }
}

/// A navigation or social link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn kind(&self) -> HrefKind {
        classify(&self.href)
    }
}

/// Link label to icon identifier (e.g. `GitHub` -> `lucide:github`).
///
/// Entries keep insertion order so exports list icons the way they were
/// declared; labels are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconMap(Vec<(String, String)>);

impl IconMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the icon for a label. Labels are matched exactly.
    pub fn icon_for(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, icon)| icon.as_str())
    }

    /// Set the icon for a label, keeping its position if it already exists
    pub fn insert(&mut self, label: impl Into<String>, icon: impl Into<String>) -> Option<String> {
        let label = label.into();
        let icon = icon.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(std::mem::replace(existing, icon)),
            None => {
                self.0.push((label, icon));
                None
            }
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.icon_for(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this map; entries in `other` win
    pub fn merge(&mut self, other: IconMap) {
        for (label, icon) in other.0 {
            self.insert(label, icon);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IconMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = IconMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for IconMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for IconMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IconMapVisitor;

        impl<'de> Visitor<'de> for IconMapVisitor {
            type Value = IconMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of label = \"icon\" entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<IconMap, A::Error> {
                let mut map = IconMap::new();
                while let Some((label, icon)) = access.next_entry::<String, String>()? {
                    map.insert(label, icon);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(IconMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(posts_per_page: u32, featured_post_count: u32) -> Site {
        Site {
            title: "Test".to_string(),
            description: "Test site".to_string(),
            href: "https://example.com/".to_string(),
            author: "tester".to_string(),
            locale: "en-US".to_string(),
            featured_post_count,
            posts_per_page,
        }
    }

    #[test]
    fn test_page_count() {
        let s = site(3, 2);
        assert_eq!(s.page_count(0), 1);
        assert_eq!(s.page_count(1), 1);
        assert_eq!(s.page_count(3), 1);
        assert_eq!(s.page_count(4), 2);
        assert_eq!(s.page_count(7), 3);
    }

    #[test]
    fn test_page_bounds() {
        let s = site(3, 2);
        assert_eq!(s.page_bounds(1, 7), Some(0..3));
        assert_eq!(s.page_bounds(2, 7), Some(3..6));
        assert_eq!(s.page_bounds(3, 7), Some(6..7));
        assert_eq!(s.page_bounds(4, 7), None);
        assert_eq!(s.page_bounds(0, 7), None);
        assert_eq!(s.page_bounds(1, 0), Some(0..0));
    }

    #[test]
    fn test_zero_posts_per_page_does_not_panic() {
        let s = site(0, 2);
        assert_eq!(s.page_count(5), 5);
        assert_eq!(s.page_bounds(2, 5), Some(1..2));
    }

    #[test]
    fn test_featured_count() {
        let s = site(3, 2);
        assert_eq!(s.featured_count(0), 0);
        assert_eq!(s.featured_count(1), 1);
        assert_eq!(s.featured_count(10), 2);
    }

    #[test]
    fn test_absolute_url() {
        let s = site(3, 2);
        assert_eq!(s.absolute_url("/rss.xml"), "https://example.com/rss.xml");
        assert_eq!(s.absolute_url("blog"), "https://example.com/blog");
        assert_eq!(s.absolute_url("./about"), "https://example.com/about");
        assert_eq!(s.absolute_url(""), "https://example.com/");
        assert_eq!(
            s.absolute_url("https://github.com/bwrg3r"),
            "https://github.com/bwrg3r"
        );

        // Surrounding whitespace is ignored, as in `classify`
        assert_eq!(s.absolute_url(" /blog "), "https://example.com/blog");
        assert_eq!(s.absolute_url("\tabout"), "https://example.com/about");
        assert_eq!(
            s.absolute_url(" https://github.com/bwrg3r\n"),
            "https://github.com/bwrg3r"
        );

        let mut no_slash = site(3, 2);
        no_slash.href = "https://example.com".to_string();
        assert_eq!(no_slash.absolute_url("/blog"), "https://example.com/blog");
    }

    #[test]
    fn test_icon_map_lookup_and_merge() {
        let mut icons: IconMap = [("GitHub", "lucide:github"), ("RSS", "lucide:rss")]
            .into_iter()
            .collect();
        assert_eq!(icons.icon_for("GitHub"), Some("lucide:github"));
        assert_eq!(icons.icon_for("github"), None);
        assert_eq!(icons.icon_for("Mastodon"), None);

        let overrides: IconMap = [("RSS", "lucide:rss-2"), ("Mastodon", "simple-icons:mastodon")]
            .into_iter()
            .collect();
        icons.merge(overrides);
        assert_eq!(icons.len(), 3);
        assert_eq!(icons.icon_for("RSS"), Some("lucide:rss-2"));
        assert_eq!(icons.icon_for("Mastodon"), Some("simple-icons:mastodon"));
    }

    #[test]
    fn test_icon_map_keeps_declaration_order() {
        let mut icons: IconMap = [
            ("Website", "lucide:globe"),
            ("GitHub", "lucide:github"),
            ("Email", "lucide:mail"),
        ]
        .into_iter()
        .collect();
        let overrides: IconMap = [("GitHub", "simple-icons:github"), ("Bluesky", "simple-icons:bluesky")]
            .into_iter()
            .collect();
        icons.merge(overrides);

        let labels: Vec<_> = icons.labels().collect();
        assert_eq!(labels, vec!["Website", "GitHub", "Email", "Bluesky"]);
        assert_eq!(icons.icon_for("GitHub"), Some("simple-icons:github"));
        assert_eq!(icons.insert("Email", "lucide:at-sign"), Some("lucide:mail".to_string()));
        assert_eq!(icons.len(), 4);
    }

    #[test]
    fn test_social_icons_reports_missing_entries() {
        let config = SiteConfig {
            site: site(3, 2),
            nav_links: vec![],
            social_links: vec![
                Link::new("https://github.com/bwrg3r", "GitHub"),
                Link::new("https://example.social/@bwrg3r", "Mastodon"),
            ],
            icon_map: [("GitHub", "lucide:github")].into_iter().collect(),
        };

        let resolved: Vec<_> = config
            .social_icons()
            .map(|(link, icon)| (link.label.as_str(), icon))
            .collect();
        assert_eq!(
            resolved,
            vec![("GitHub", Some("lucide:github")), ("Mastodon", None)]
        );
    }

    #[test]
    fn test_link_kind() {
        assert_eq!(Link::new("/blog", "blog").kind(), HrefKind::RootRelative);
        assert!(Link::new("https://github.com/bwrg3r", "GitHub").kind().is_external());
    }
}
