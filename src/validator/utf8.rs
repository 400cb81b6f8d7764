//! Scalar-value decoding over raw bytes.
//!
//! Labels are inspected before anything guarantees they are UTF-8, so these
//! helpers decode one scalar value at a time and report a malformed sequence
//! instead of failing the whole slice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoded {
    /// A scalar value and the number of bytes it occupies.
    Scalar(char, usize),
    Malformed,
}

fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode the scalar value starting at `bytes[0]`.
pub(crate) fn decode_first(bytes: &[u8]) -> Decoded {
    let Some(&lead) = bytes.first() else {
        return Decoded::Malformed;
    };
    let width = sequence_width(lead);
    if width == 0 || bytes.len() < width {
        return Decoded::Malformed;
    }
    // from_utf8 also rejects overlongs and surrogates left by the width table.
    match std::str::from_utf8(&bytes[..width]) {
        Ok(s) => match s.chars().next() {
            Some(c) => Decoded::Scalar(c, width),
            None => Decoded::Malformed,
        },
        Err(_) => Decoded::Malformed,
    }
}

/// Decode the scalar value ending at the last byte of `bytes`.
///
/// Walks back over at most three continuation bytes to find the lead byte;
/// the decoded sequence must end exactly at the end of the slice.
pub(crate) fn decode_last(bytes: &[u8]) -> Decoded {
    let end = bytes.len();
    if end == 0 {
        return Decoded::Malformed;
    }
    let limit = end.saturating_sub(4);
    let mut start = end - 1;
    while start > limit && is_continuation(bytes[start]) {
        start -= 1;
    }
    match decode_first(&bytes[start..]) {
        Decoded::Scalar(c, width) if start + width == end => Decoded::Scalar(c, width),
        _ => Decoded::Malformed,
    }
}

/// Number of scalar values in `bytes`, each malformed byte counting as one.
pub(crate) fn scalar_count(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += match decode_first(&bytes[i..]) {
            Decoded::Scalar(_, width) => width,
            Decoded::Malformed => 1,
        };
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii_and_multibyte() {
        assert_eq!(decode_first(b"abc"), Decoded::Scalar('a', 1));
        assert_eq!(decode_first("é.".as_bytes()), Decoded::Scalar('é', 2));
        assert_eq!(decode_first("€".as_bytes()), Decoded::Scalar('€', 3));
        assert_eq!(decode_first("😀".as_bytes()), Decoded::Scalar('😀', 4));
    }

    #[test]
    fn rejects_malformed_leads() {
        assert_eq!(decode_first(&[0x80, b'a']), Decoded::Malformed);
        assert_eq!(decode_first(&[0xC0, 0xAF]), Decoded::Malformed);
        assert_eq!(decode_first(&[0xE2, 0x82]), Decoded::Malformed);
        // encoded surrogate U+D800
        assert_eq!(decode_first(&[0xED, 0xA0, 0x80]), Decoded::Malformed);
        assert_eq!(decode_first(&[]), Decoded::Malformed);
    }

    #[test]
    fn decodes_last_scalar() {
        assert_eq!(decode_last(b"abc"), Decoded::Scalar('c', 1));
        assert_eq!(decode_last("abé".as_bytes()), Decoded::Scalar('é', 2));
        assert_eq!(decode_last("a😀".as_bytes()), Decoded::Scalar('😀', 4));
    }

    #[test]
    fn last_scalar_must_end_the_slice() {
        assert_eq!(decode_last(&[b'a', 0xFF]), Decoded::Malformed);
        assert_eq!(decode_last(&[b'a', 0xA9]), Decoded::Malformed);
        assert_eq!(decode_last(&[b'a', 0xE2, 0x82]), Decoded::Malformed);
        assert_eq!(decode_last(&[0x80, 0x80, 0x80, 0x80, 0x80]), Decoded::Malformed);
    }

    #[test]
    fn counts_malformed_bytes_individually() {
        assert_eq!(scalar_count(b"example"), 7);
        assert_eq!(scalar_count("exämple".as_bytes()), 7);
        assert_eq!(scalar_count(&[b'a', 0xE2, 0x82, b'b']), 4);
        assert_eq!(scalar_count(&[0xFF, 0xFE]), 2);
        assert_eq!(scalar_count(b""), 0);
    }
}
