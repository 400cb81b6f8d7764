use std::collections::HashSet;

use super::RegistryError;

/// IANA's list of delegated TLDs, the usual refresh source.
pub const IANA_TLD_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Short name accepted in place of [`IANA_TLD_URL`].
pub const IANA_ALIAS: &str = "iana";

pub(crate) fn resolve_location(location: &str) -> &str {
    if location.eq_ignore_ascii_case(IANA_ALIAS) {
        IANA_TLD_URL
    } else {
        location
    }
}

/// Retrieves the raw text of a TLD list.
pub trait FetchTldList {
    fn fetch(&self, location: &str) -> Result<String, RegistryError>;
}

/// Reads plain paths and `file://` URLs from disk; `http(s)://` URLs need the
/// `with-http` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFetcher;

impl FetchTldList for LocationFetcher {
    fn fetch(&self, location: &str) -> Result<String, RegistryError> {
        if let Some(path) = location.strip_prefix("file://") {
            return read_file(path);
        }
        if location.starts_with("http://") || location.starts_with("https://") {
            return fetch_http(location);
        }
        if location.contains("://") {
            return Err(RegistryError::UnsupportedLocation(location.to_string()));
        }
        read_file(location)
    }
}

fn read_file(path: &str) -> Result<String, RegistryError> {
    std::fs::read_to_string(path).map_err(|e| RegistryError::read(path, e))
}

#[cfg(feature = "with-http")]
fn fetch_http(location: &str) -> Result<String, RegistryError> {
    use std::time::Duration;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("domaincheck_lib/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| RegistryError::http(location, e))?;

    let response = client
        .get(location)
        .send()
        .map_err(|e| RegistryError::http(location, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RegistryError::HttpStatus {
            location: location.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| RegistryError::http(location, e))
}

#[cfg(not(feature = "with-http"))]
fn fetch_http(location: &str) -> Result<String, RegistryError> {
    Err(RegistryError::UnsupportedLocation(location.to_string()))
}

/// Parse a flat TLD list: one entry per line, `#` comments and blank lines
/// skipped, entries lowercased (the IANA file ships them uppercase).
pub fn parse_tld_list(text: &str) -> Result<HashSet<String>, RegistryError> {
    let mut entries = HashSet::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !line.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(RegistryError::parse(idx + 1, line));
        }
        entries.insert(line.to_ascii_lowercase());
    }
    Ok(entries)
}
