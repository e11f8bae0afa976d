use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// site.toml is not valid TOML or doesn't have the expected shape
    ConfigParse(String),
    /// Reading a config file failed
    Io { path: PathBuf, source: io::Error },
    /// A value is present but unusable, e.g. a relative site URL
    InvalidData(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Invalid site.toml: {}", msg),
            Error::Io { path, source } => write!(f, "Cannot read {}: {}", path.display(), source),
            Error::InvalidData(msg) => write!(f, "Invalid site configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_names_the_file() {
        let err = Error::io(
            "sites/blog/site.toml",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("sites/blog/site.toml"));
        assert!(msg.contains("missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_errors_have_no_source() {
        let err = Error::ConfigParse("expected a table".to_string());
        assert_eq!(err.to_string(), "Invalid site.toml: expected a table");
        assert!(err.source().is_none());
    }
}
