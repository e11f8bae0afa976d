pub mod config;
pub mod defaults;
pub mod error;
pub mod href;
pub mod types;

pub use config::{parse_site_toml, parse_site_toml_str};
pub use defaults::builtin;
pub use error::{Error, Result};
pub use href::{HrefKind, check_absolute_url, classify};
pub use types::*;
