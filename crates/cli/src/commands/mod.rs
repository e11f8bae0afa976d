pub mod export;
pub mod icon;
pub mod init;
pub mod validate;

use anyhow::{Context, Result};
use site_kit_core::{SiteConfig, builtin, parse_site_toml};
use std::path::Path;

pub const CONFIG_FILE: &str = "site.toml";

/// Load `<path>/site.toml`, or the built-in configuration when no path is given
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        tracing::info!("no site directory given, using built-in configuration");
        return Ok(builtin().clone());
    };

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'site-kit init {}' first",
            CONFIG_FILE,
            path.display(),
            path.display()
        );
    }

    tracing::info!(path = %config_path.display(), "loading site configuration");
    parse_site_toml(&config_path).with_context(|| format!("Failed to parse {}", config_path.display()))
}
