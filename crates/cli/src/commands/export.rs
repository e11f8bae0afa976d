use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use site_kit_core::{IconMap, Link, Site, SiteConfig};
use std::fs;
use std::path::PathBuf;

use super::load_config;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// `site`, `navLinks`, `socialLinks`, `iconMap` for a JS-side renderer
    Json,
    /// site.toml layout, loadable again with `site-kit validate`
    Toml,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    site: JsonSite<'a>,
    nav_links: &'a [Link],
    social_links: &'a [Link],
    icon_map: &'a IconMap,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSite<'a> {
    title: &'a str,
    description: &'a str,
    href: &'a str,
    author: &'a str,
    locale: &'a str,
    featured_post_count: u32,
    posts_per_page: u32,
}

impl<'a> From<&'a Site> for JsonSite<'a> {
    fn from(site: &'a Site) -> Self {
        JsonSite {
            title: &site.title,
            description: &site.description,
            href: &site.href,
            author: &site.author,
            locale: &site.locale,
            featured_post_count: site.featured_post_count,
            posts_per_page: site.posts_per_page,
        }
    }
}

#[derive(Serialize)]
struct TomlExport<'a> {
    site: &'a Site,
    nav: &'a [Link],
    social: &'a [Link],
    icons: &'a IconMap,
}

pub async fn run(path: Option<PathBuf>, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let config = load_config(path.as_deref())?;
    let rendered = render(&config, format)?;

    match output {
        Some(out) => {
            fs::write(&out, &rendered)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), ?format, "exported configuration");
            eprintln!("✓ Wrote {}", out.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn render(config: &SiteConfig, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let export = JsonExport {
                site: JsonSite::from(&config.site),
                nav_links: &config.nav_links,
                social_links: &config.social_links,
                icon_map: &config.icon_map,
            };
            let mut json =
                serde_json::to_string_pretty(&export).context("Failed to serialize JSON")?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Toml => {
            let export = TomlExport {
                site: &config.site,
                nav: &config.nav_links,
                social: &config.social_links,
                icons: &config.icon_map,
            };
            toml::to_string(&export).context("Failed to serialize TOML")
        }
    }
}
