use anyhow::{Context, Result};
use site_kit_core::defaults::{ICON_MAP, NAV_LINKS, SITE, SOCIAL_LINKS};
use site_kit_core::{check_absolute_url, parse_site_toml_str};
use std::fs;
use std::path::{Path, PathBuf};

use super::CONFIG_FILE;

/// Escape a string for safe inclusion in a TOML basic string
///
/// Quote and backslash get a backslash; the short escapes (`\b`, `\t`, `\n`,
/// `\f`, `\r`) are used where TOML has them and every other control
/// character (U+0000-U+001F, U+007F) becomes `\uXXXX`, since basic strings
/// can't hold them raw.
///
/// The toml crate's serializer would drop the comments that make the
/// generated file self-explanatory, so the template is assembled by hand.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0C' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quote a TOML key if it isn't a valid bare key
fn toml_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        format!("\"{}\"", toml_escape_string(key))
    }
}

/// Initialize a site directory with a site.toml seeded from the built-in configuration
pub async fn run(
    path: PathBuf,
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONFIG_FILE,
            config_path.display()
        );
    }

    generate_site_toml(&path, title.as_deref(), author.as_deref(), url.as_deref())?;
    tracing::info!(path = %config_path.display(), "wrote site configuration");

    println!("\n✓ Initialization complete!");
    println!("\nGenerated:");
    println!("  {}/", path.display());
    println!("  └── {}            ← Edit this to set title, links, icons", CONFIG_FILE);

    println!("\nNext steps:");
    println!("  1. Edit {} (description, locale, nav and social links)", CONFIG_FILE);
    println!("  2. Check it: site-kit validate {}", path.display());
    println!("  3. Hand it to the renderer: site-kit export {}", path.display());

    Ok(())
}

fn generate_site_toml(
    base: &Path,
    title: Option<&str>,
    author: Option<&str>,
    url: Option<&str>,
) -> Result<()> {
    let content = render_site_toml(title, author, url)?;
    fs::write(base.join(CONFIG_FILE), content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE))?;
    Ok(())
}

fn render_site_toml(title: Option<&str>, author: Option<&str>, url: Option<&str>) -> Result<String> {
    if let Some(u) = url {
        check_absolute_url(u, "--url")?;
    }

    let site_title = toml_escape_string(title.unwrap_or(SITE.title));
    let site_author = toml_escape_string(author.unwrap_or(SITE.author));
    let site_href = toml_escape_string(url.unwrap_or(SITE.href));
    let description = toml_escape_string(SITE.description);
    let locale = toml_escape_string(SITE.locale);
    let featured = SITE.featured_post_count;
    let per_page = SITE.posts_per_page;

    let mut toml = format!(
        "# Generated by site-kit init\n\
# Edit this file to customize your site\n\
\n\
[site]\n\
title = \"{site_title}\"\n\
description = \"{description}\"\n\
href = \"{site_href}\"  # Canonical absolute URL\n\
author = \"{site_author}\"\n\
locale = \"{locale}\"\n\
featured_post_count = {featured}  # Posts in the home page featured section\n\
posts_per_page = {per_page}  # Must be at least 1\n\
\n\
# Navigation, rendered in this order\n"
    );

    for (href, label) in NAV_LINKS {
        toml.push_str("[[nav]]\n");
        toml.push_str(&format!("href = \"{}\"\n", toml_escape_string(href)));
        toml.push_str(&format!("label = \"{}\"\n\n", toml_escape_string(label)));
    }

    toml.push_str("# Social links, rendered in this order. Each label needs an icon.\n");
    for (href, label) in SOCIAL_LINKS {
        toml.push_str("[[social]]\n");
        toml.push_str(&format!("href = \"{}\"\n", toml_escape_string(href)));
        toml.push_str(&format!("label = \"{}\"\n\n", toml_escape_string(label)));
    }

    toml.push_str("# Icons for link labels. These entries are built in; add or override here.\n");
    toml.push_str("[icons]\n");
    for (label, icon) in ICON_MAP {
        toml.push_str(&format!(
            "# {} = \"{}\"\n",
            toml_key(label),
            toml_escape_string(icon)
        ));
    }

    // Validate the generated TOML can be parsed
    parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - this is a bug in the template generator")?;

    Ok(toml)
}
