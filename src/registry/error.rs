use thiserror::Error;

/// Errors raised while refreshing the TLD list. The previously loaded list
/// stays in place whenever one of these is returned.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("reading TLD list {path} failed: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "with-http")]
    #[error("fetching TLD list {location} failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(feature = "with-http")]
    #[error("fetching TLD list {location} returned HTTP {status}")]
    HttpStatus { location: String, status: u16 },
    #[error("unsupported TLD list location: {0}")]
    UnsupportedLocation(String),
    #[error("invalid TLD entry '{entry}' on line {line}")]
    Parse { line: usize, entry: String },
    #[error("TLD list {location} contains no entries")]
    EmptyList { location: String },
}

impl RegistryError {
    pub(crate) fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    #[cfg(feature = "with-http")]
    pub(crate) fn http(location: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            location: location.into(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, entry: impl Into<String>) -> Self {
        Self::Parse {
            line,
            entry: entry.into(),
        }
    }
}
