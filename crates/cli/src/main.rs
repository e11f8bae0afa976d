mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::export::ExportFormat;

#[derive(Parser)]
#[command(name = "site-kit")]
#[command(version, about = "Site metadata, navigation and social links for a static blog", long_about = None)]
struct Cli {
    /// Enable info-level logging (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write a site.toml seeded with the built-in configuration
    Init {
        /// Existing site directory
        path: PathBuf,

        /// Site title
        #[arg(long)]
        title: Option<String>,

        /// Site author
        #[arg(long)]
        author: Option<String>,

        /// Canonical site URL (absolute)
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate site configuration
    Validate {
        /// Site directory containing site.toml (built-in config if omitted)
        path: Option<PathBuf>,
    },

    /// Print the resolved configuration for a renderer
    Export {
        /// Site directory containing site.toml (built-in config if omitted)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a link label to its icon identifier
    Icon {
        /// Link label, e.g. GitHub
        label: String,

        /// Site directory containing site.toml (built-in config if omitted)
        path: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Init {
            path,
            title,
            author,
            url,
        } => commands::init::run(path, title, author, url).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Export {
            path,
            format,
            output,
        } => commands::export::run(path, format, output).await,
        Command::Icon { label, path } => commands::icon::run(label, path).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "site-kit", &mut io::stdout());
            Ok(())
        }
    }
}
