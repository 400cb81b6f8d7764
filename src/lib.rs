#![forbid(unsafe_code)]
//! domaincheck_lib — validation de noms de domaine
//!
//! Checks total length, label count, label syntax and the TLD against a
//! refreshable [`TldRegistry`].

pub mod registry;
pub mod validator;

pub use registry::{
    FetchTldList, IANA_ALIAS, IANA_TLD_URL, LocationFetcher, RegistryError, TldLookup,
    TldRegistry, TldSet, TldSnapshot, TldSource, parse_tld_list,
};
pub use validator::{
    DEFAULT_MAX_LENGTH, Domain, DomainError, DomainOptions, DomainReport, MAX_LABEL_LENGTH,
    MAX_LABELS, Severity, validate_domain,
};
