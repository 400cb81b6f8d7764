use thiserror::Error;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Cap on the total number of scalar values when no `max_length` is set.
pub const DEFAULT_MAX_LENGTH: usize = 255;
/// 127 sub-domains plus the TLD.
pub const MAX_LABELS: usize = 128;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Optional constraints applied on top of the fixed domain rules.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainOptions {
    /// Replaces [`DEFAULT_MAX_LENGTH`] as the total length cap.
    pub max_length: Option<usize>,
    /// Minimum number of labels before the TLD.
    pub min_subdomains: Option<usize>,
    /// Maximum number of labels before the TLD.
    pub max_subdomains: Option<usize>,
}

impl DomainOptions {
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_min_subdomains(mut self, min: usize) -> Self {
        self.min_subdomains = Some(min);
        self
    }

    pub fn with_max_subdomains(mut self, max: usize) -> Self {
        self.max_subdomains = Some(max);
        self
    }

    pub(crate) fn length_cap(&self) -> usize {
        self.max_length.unwrap_or(DEFAULT_MAX_LENGTH)
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The input is simply rejected.
    Invalid,
    /// Every syntactic check passed yet the domain was still refused.
    Severe,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Severe => "severe",
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// Total length, label length, label count or sub-domain bounds exceeded.
    #[error("invalid length")]
    Length,
    /// Empty label, misplaced hyphen or character outside `[A-Za-z0-9-]`.
    #[error("invalid formatting")]
    Format,
    #[error("invalid UTF-8 encoding")]
    InvalidEncoding,
    /// Well-formed domain whose TLD is not in the registry.
    #[error("unknown error")]
    Unknown,
}

impl DomainError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Length | Self::Format | Self::InvalidEncoding => Severity::Invalid,
            Self::Unknown => Severity::Severe,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Length => "invalid length",
            Self::Format => "invalid formatting",
            Self::InvalidEncoding => "invalid UTF-8 encoding",
            Self::Unknown => "unknown error",
        }
    }

    /// Stable identifier used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Format => "format",
            Self::InvalidEncoding => "invalid_encoding",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainReport {
    pub domain: String,
    pub valid: bool,
    pub error: Option<DomainError>,
    pub severity: Option<Severity>,
    pub message: Option<String>,
}
