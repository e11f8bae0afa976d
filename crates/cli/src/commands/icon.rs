use anyhow::Result;
use std::path::PathBuf;

use super::load_config;

/// Print the icon identifier for `label`
pub async fn run(label: String, path: Option<PathBuf>) -> Result<()> {
    let config = load_config(path.as_deref())?;

    match config.icon_map.icon_for(&label) {
        Some(icon) => {
            println!("{}", icon);
            Ok(())
        }
        None => {
            let known: Vec<&str> = config.icon_map.labels().collect();
            anyhow::bail!(
                "No icon for label '{}'\nKnown labels: {}",
                label,
                known.join(", ")
            )
        }
    }
}
