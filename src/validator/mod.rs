mod domain;
mod types;
mod utf8;

use std::fmt;

pub use types::{
    DEFAULT_MAX_LENGTH, DomainError, DomainOptions, DomainReport, MAX_LABEL_LENGTH, MAX_LABELS,
    Severity,
};

use crate::registry::TldLookup;
use domain::check_domain;

/// Validate `candidate` as a domain name.
///
/// `candidate` may hold arbitrary bytes; malformed UTF-8 is reported as
/// [`DomainError::InvalidEncoding`] rather than assumed away. The registry is
/// only consulted once every syntactic check has passed. No case folding is
/// applied, so the TLD must match a registry entry byte for byte.
pub fn validate_domain<R>(
    candidate: &[u8],
    options: &DomainOptions,
    registry: &R,
) -> Result<(), DomainError>
where
    R: TldLookup + ?Sized,
{
    let result = check_domain(candidate, options, registry);

    #[cfg(feature = "with-tracing")]
    {
        if let Err(err) = &result {
            tracing::debug!(
                domain = %String::from_utf8_lossy(candidate),
                kind = err.kind(),
                severity = err.severity().as_str(),
                "domain rejected"
            );
        }
    }

    result
}

/// A domain value bundled with its constraints and an optional custom
/// failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    bytes: Vec<u8>,
    options: DomainOptions,
    message: Option<String>,
}

impl Domain {
    pub fn new(domain: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: domain.into(),
            options: DomainOptions::default(),
            message: None,
        }
    }

    pub fn with_options(mut self, options: DomainOptions) -> Self {
        self.options = options;
        self
    }

    pub fn min_subdomains(mut self, min: usize) -> Self {
        self.options.min_subdomains = Some(min);
        self
    }

    pub fn max_subdomains(mut self, max: usize) -> Self {
        self.options.max_subdomains = Some(max);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.options.max_length = Some(max);
        self
    }

    /// Message reported instead of the error's own text on failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn options(&self) -> &DomainOptions {
        &self.options
    }

    pub fn validate<R>(&self, registry: &R) -> Result<(), DomainError>
    where
        R: TldLookup + ?Sized,
    {
        validate_domain(&self.bytes, &self.options, registry)
    }

    /// The custom message if one was set, the error's fixed text otherwise.
    pub fn failure_message<'a>(&'a self, err: &DomainError) -> &'a str {
        match self.message.as_deref() {
            Some(message) => message,
            None => err.message(),
        }
    }

    pub fn report<R>(&self, registry: &R) -> DomainReport
    where
        R: TldLookup + ?Sized,
    {
        let domain = self.to_string();
        match self.validate(registry) {
            Ok(()) => DomainReport {
                domain,
                valid: true,
                error: None,
                severity: None,
                message: None,
            },
            Err(err) => DomainReport {
                domain,
                valid: false,
                error: Some(err),
                severity: Some(err.severity()),
                message: Some(self.failure_message(&err).to_string()),
            },
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
