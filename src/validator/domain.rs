use super::types::{DomainError, DomainOptions, MAX_LABEL_LENGTH, MAX_LABELS};
use super::utf8::{Decoded, decode_first, decode_last, scalar_count};
use crate::registry::TldLookup;

/// Runs the validation stages in order; the first failing stage decides.
pub(crate) fn check_domain<R>(
    candidate: &[u8],
    options: &DomainOptions,
    registry: &R,
) -> Result<(), DomainError>
where
    R: TldLookup + ?Sized,
{
    // Malformed bytes count as one unit here; label checks catch them later.
    if scalar_count(candidate) > options.length_cap() {
        return Err(DomainError::Length);
    }

    let labels: Vec<&[u8]> = candidate.split(|&b| b == b'.').collect();
    if labels.len() > MAX_LABELS {
        return Err(DomainError::Length);
    }

    check_subdomain_bounds(labels.len(), options)?;

    for label in &labels {
        check_label(label)?;
    }

    // TODO: all-numeric TLDs are still accepted when the registry lists them.
    match labels.last() {
        Some(tld) if registry.contains_tld(tld) => Ok(()),
        _ => Err(DomainError::Unknown),
    }
}

/// The bounds count labels before the TLD, hence the `+ 1`.
fn check_subdomain_bounds(label_count: usize, options: &DomainOptions) -> Result<(), DomainError> {
    if let Some(min) = options.min_subdomains {
        if label_count < min.saturating_add(1) {
            return Err(DomainError::Length);
        }
    }
    if let Some(max) = options.max_subdomains {
        if label_count > max.saturating_add(1) {
            return Err(DomainError::Length);
        }
    }
    Ok(())
}

pub(crate) fn check_label(label: &[u8]) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::Format);
    }
    if scalar_count(label) > MAX_LABEL_LENGTH {
        return Err(DomainError::Length);
    }

    for edge in [decode_first(label), decode_last(label)] {
        match edge {
            Decoded::Malformed => return Err(DomainError::InvalidEncoding),
            Decoded::Scalar('-', _) => return Err(DomainError::Format),
            Decoded::Scalar(..) => {}
        }
    }

    let mut i = 0;
    while i < label.len() {
        let byte = label[i];
        if byte.is_ascii() {
            if !is_label_byte(byte) {
                return Err(DomainError::Format);
            }
            i += 1;
            continue;
        }
        match decode_first(&label[i..]) {
            // Only the ASCII ranges are accepted, so any well-formed
            // non-ASCII scalar is a formatting error.
            Decoded::Scalar(..) => return Err(DomainError::Format),
            Decoded::Malformed => return Err(DomainError::InvalidEncoding),
        }
    }
    Ok(())
}

fn is_label_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}
