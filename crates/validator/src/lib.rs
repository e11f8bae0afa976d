// Integrity checks over a loaded site configuration.
// Nothing here fails: every defect becomes an entry in the report.

use site_kit_core::{HrefKind, Link, SiteConfig, check_absolute_url};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    /// True when the configuration has no errors (warnings are allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn note(&mut self, msg: impl Into<String>) {
        self.info.push(msg.into());
    }
}

pub fn validate_site(config: &SiteConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_site(config, &mut report);
    check_links("nav", &config.nav_links, &mut report);
    check_links("social", &config.social_links, &mut report);
    check_icons(config, &mut report);

    report.note(format!(
        "{} nav link(s), {} social link(s), {} icon(s)",
        config.nav_links.len(),
        config.social_links.len(),
        config.icon_map.len()
    ));

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );

    report
}

fn check_site(config: &SiteConfig, report: &mut ValidationReport) {
    let site = &config.site;

    if let Err(e) = check_absolute_url(&site.href, "site.href") {
        report.error(e.to_string());
    }

    if site.posts_per_page == 0 {
        report.error("site.posts_per_page must be at least 1");
    }
    if site.featured_post_count == 0 {
        report.warn("site.featured_post_count is 0, the home page will show no featured posts");
    }

    for (field, value) in [
        ("site.title", &site.title),
        ("site.author", &site.author),
        ("site.description", &site.description),
    ] {
        if value.trim().is_empty() {
            report.warn(format!("{} is empty", field));
        }
    }

    if !is_locale_tag(&site.locale) {
        report.warn(format!(
            "site.locale '{}' doesn't look like a language tag (e.g. en-US)",
            site.locale
        ));
    }
}

fn check_links(section: &str, links: &[Link], report: &mut ValidationReport) {
    let mut seen = HashSet::new();

    for (i, link) in links.iter().enumerate() {
        let position = format!("{}[{}]", section, i);

        if link.label.trim().is_empty() {
            report.error(format!("{} has an empty label", position));
        } else if !seen.insert(link.label.as_str()) {
            report.warn(format!(
                "{} duplicates label '{}'",
                position, link.label
            ));
        }

        match link.kind() {
            HrefKind::Empty => {
                report.error(format!("{} ('{}') has an empty href", position, link.label));
            }
            HrefKind::Relative => {
                report.warn(format!(
                    "{} ('{}') href '{}' is relative to the current page; use '/{}' for a site path",
                    position,
                    link.label,
                    link.href,
                    link.href.trim_start_matches("./")
                ));
            }
            HrefKind::Absolute | HrefKind::RootRelative | HrefKind::MailTo => {}
        }
    }
}

fn check_icons(config: &SiteConfig, report: &mut ValidationReport) {
    for (i, (link, icon)) in config.social_icons().enumerate() {
        if link.label.trim().is_empty() {
            continue;
        }
        if icon.is_none() {
            report.error(format!(
                "social[{}] label '{}' has no entry in the icon map",
                i, link.label
            ));
        }
    }

    let used: HashSet<&str> = config
        .social_links
        .iter()
        .map(|l| l.label.as_str())
        .collect();

    for (label, icon) in config.icon_map.iter() {
        if icon.trim().is_empty() {
            report.error(format!("icon for '{}' is empty", label));
        }
        if !used.contains(label) {
            report.note(format!("icon '{}' ({}) is not used by any social link", label, icon));
        }
    }
}

/// Loose BCP 47 check: 2-3 letter language, optional subtags of 2-8 alphanumerics
fn is_locale_tag(tag: &str) -> bool {
    let mut parts = tag.split(['-', '_']);

    let Some(language) = parts.next() else {
        return false;
    };
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    parts.all(|p| (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_kit_core::builtin;

    fn contains(entries: &[String], needle: &str) -> bool {
        entries.iter().any(|e| e.contains(needle))
    }

    #[test]
    fn test_builtin_config_is_valid() {
        let report = validate_site(builtin());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_builtin_reports_unused_icons() {
        let report = validate_site(builtin());
        assert!(contains(&report.info, "'LinkedIn'"));
        assert!(contains(&report.info, "'Twitter'"));
        assert!(contains(&report.info, "'Website'"));
        assert!(!contains(&report.info, "'GitHub'"));
        assert!(contains(&report.info, "3 nav link(s), 3 social link(s), 6 icon(s)"));
    }

    #[test]
    fn test_missing_icon_is_an_error() {
        let mut config = builtin().clone();
        config
            .social_links
            .push(Link::new("https://example.social/@bwrg3r", "Mastodon"));

        let report = validate_site(&config);
        assert!(!report.is_valid());
        assert!(contains(&report.errors, "'Mastodon' has no entry in the icon map"));
    }

    #[test]
    fn test_empty_icon_identifier_is_an_error() {
        let mut config = builtin().clone();
        config.icon_map.insert("GitHub", "");

        let report = validate_site(&config);
        assert!(contains(&report.errors, "icon for 'GitHub' is empty"));
    }

    #[test]
    fn test_bad_site_fields() {
        let mut config = builtin().clone();
        config.site.href = "bwrg3r.github.io".to_string();
        config.site.posts_per_page = 0;
        config.site.featured_post_count = 0;
        config.site.author = " ".to_string();
        config.site.locale = "english".to_string();

        let report = validate_site(&config);
        assert!(contains(&report.errors, "not an absolute URL"));
        assert!(contains(&report.errors, "posts_per_page"));
        assert!(contains(&report.warnings, "featured_post_count"));
        assert!(contains(&report.warnings, "site.author is empty"));
        assert!(contains(&report.warnings, "site.locale 'english'"));
    }

    #[test]
    fn test_link_problems() {
        let mut config = builtin().clone();
        config.nav_links = vec![
            Link::new("/blog", "blog"),
            Link::new("/blog/archive", "blog"),
            Link::new("about", "about"),
            Link::new("", "broken"),
            Link::new("/tags", ""),
        ];

        let report = validate_site(&config);
        assert!(contains(&report.warnings, "nav[1] duplicates label 'blog'"));
        assert!(contains(&report.warnings, "use '/about'"));
        assert!(contains(&report.errors, "nav[3] ('broken') has an empty href"));
        assert!(contains(&report.errors, "nav[4] has an empty label"));
    }

    #[test]
    fn test_is_locale_tag() {
        assert!(is_locale_tag("en"));
        assert!(is_locale_tag("en-US"));
        assert!(is_locale_tag("zh-Hant-TW"));
        assert!(is_locale_tag("pt_BR"));
        assert!(!is_locale_tag(""));
        assert!(!is_locale_tag("english"));
        assert!(!is_locale_tag("en-"));
    }
}
