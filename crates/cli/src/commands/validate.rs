use site_kit_validator::{ValidationReport, validate_site};
use std::path::PathBuf;

use super::load_config;

pub async fn run(path: Option<PathBuf>) -> anyhow::Result<()> {
    match &path {
        Some(p) => println!("Validating site at: {}", p.display()),
        None => println!("Validating built-in site configuration"),
    }

    let config = load_config(path.as_deref())?;

    println!("✓ Configuration loaded");
    println!("  Site: {} by {}", config.site.title, config.site.author);
    println!("  URL: {}", config.site.href);
    println!();

    let report = validate_site(&config);
    print_report(&report);

    if !report.is_valid() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ Configuration is valid");
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for error in &report.errors {
        println!("✗ {}", error);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for info in &report.info {
        println!("ℹ {}", info);
    }
}
