//! Registry of recognized top-level domains.
//!
//! [`TldRegistry`] starts from a built-in list and can be replaced wholesale
//! with [`TldRegistry::refresh`]. Readers always see a complete
//! [`TldSnapshot`]: a refresh builds the new set aside and swaps it in
//! atomically, and a failed refresh leaves the current set untouched.

mod builtin;
mod error;
mod fetch;
mod types;

pub use error::RegistryError;
pub use fetch::{FetchTldList, IANA_ALIAS, IANA_TLD_URL, LocationFetcher, parse_tld_list};
pub use types::{TldSet, TldSnapshot, TldSource};

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;

/// Membership check used by the validator for the final TLD stage.
pub trait TldLookup {
    fn contains_tld(&self, label: &[u8]) -> bool;
}

#[derive(Debug)]
pub struct TldRegistry {
    current: ArcSwap<TldSnapshot>,
}

impl Default for TldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TldRegistry {
    /// Registry backed by the built-in list.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(TldSnapshot::builtin()),
        }
    }

    /// Registry holding exactly `entries`, stored as given (no lowercasing).
    pub fn from_entries<I, S>(entries: I, source: TldSource) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: HashSet<String> = entries.into_iter().map(Into::into).collect();
        Self {
            current: ArcSwap::from_pointee(TldSnapshot::new(entries, source)),
        }
    }

    pub fn contains(&self, label: &[u8]) -> bool {
        self.current.load().contains(label)
    }

    /// The current entry set. Later refreshes do not affect the returned value.
    pub fn snapshot(&self) -> Arc<TldSnapshot> {
        self.current.load_full()
    }

    pub fn source(&self) -> TldSource {
        self.current.load().source.clone()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Replace the entry set with the list found at `location` (path,
    /// `file://` or `http(s)://` URL, or `"iana"` for [`IANA_TLD_URL`]).
    /// Returns the number of entries loaded.
    pub fn refresh(&self, location: &str) -> Result<usize, RegistryError> {
        self.refresh_with(&LocationFetcher, location)
    }

    /// Refresh from [`IANA_TLD_URL`]; needs the `with-http` feature.
    pub fn refresh_iana(&self) -> Result<usize, RegistryError> {
        self.refresh(IANA_TLD_URL)
    }

    pub fn refresh_with<F>(&self, fetcher: &F, location: &str) -> Result<usize, RegistryError>
    where
        F: FetchTldList + ?Sized,
    {
        let location = fetch::resolve_location(location);
        match load_entries(fetcher, location) {
            Ok(entries) => {
                let count = entries.len();
                let snapshot = TldSnapshot::new(entries, TldSource::Location(location.to_string()));
                self.current.store(Arc::new(snapshot));
                #[cfg(feature = "with-tracing")]
                tracing::info!(location, count, "TLD list refreshed");
                Ok(count)
            }
            Err(err) => {
                #[cfg(feature = "with-tracing")]
                tracing::warn!(location, error = %err, "TLD list refresh failed");
                Err(err)
            }
        }
    }
}

fn load_entries<F>(fetcher: &F, location: &str) -> Result<HashSet<String>, RegistryError>
where
    F: FetchTldList + ?Sized,
{
    let text = fetcher.fetch(location)?;
    let entries = parse_tld_list(&text)?;
    if entries.is_empty() {
        return Err(RegistryError::EmptyList {
            location: location.to_string(),
        });
    }
    Ok(entries)
}

impl TldLookup for TldRegistry {
    fn contains_tld(&self, label: &[u8]) -> bool {
        self.contains(label)
    }
}

impl TldLookup for TldSnapshot {
    fn contains_tld(&self, label: &[u8]) -> bool {
        self.contains(label)
    }
}

impl<T> TldLookup for Arc<T>
where
    T: TldLookup + ?Sized,
{
    fn contains_tld(&self, label: &[u8]) -> bool {
        (**self).contains_tld(label)
    }
}
