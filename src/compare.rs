//! Key comparison rules.
//!
//! Two rows are compared key by key. Identical keys are skipped; the first
//! differing pair decides, trying integer, human-numeric and month rules in
//! that order (each only when enabled and only when both keys parse) before
//! falling back to plain text ordering. Running out of keys on either side
//! makes the rows equal.

use crate::config::SortConfig;
use crate::key::Row;
use std::cmp::Ordering;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a key that is entirely a base-10 integer with an optional sign
pub fn parse_int(key: &[u8]) -> Option<i64> {
    std::str::from_utf8(key).ok()?.parse::<i64>().ok()
}

/// Calendar position (1-12) of a full English month name
pub fn parse_month(key: &[u8]) -> Option<u8> {
    MONTHS
        .iter()
        .position(|name| name.as_bytes() == key)
        .map(|idx| idx as u8 + 1)
}

/// Parse a human-readable number such as `512`, `1.5K` or `-3G`.
///
/// Suffixes scale by powers of 1000. The whole key must be consumed.
pub fn parse_human_numeric(key: &[u8]) -> Option<f64> {
    let key = std::str::from_utf8(key).ok()?;
    let (number, multiplier) = match key.as_bytes().last()? {
        b'K' | b'k' => (&key[..key.len() - 1], 1e3),
        b'M' => (&key[..key.len() - 1], 1e6),
        b'G' => (&key[..key.len() - 1], 1e9),
        b'T' => (&key[..key.len() - 1], 1e12),
        b'P' => (&key[..key.len() - 1], 1e15),
        b'E' => (&key[..key.len() - 1], 1e18),
        b'Z' => (&key[..key.len() - 1], 1e21),
        b'Y' => (&key[..key.len() - 1], 1e24),
        _ => (key, 1.0),
    };

    let digits = number.strip_prefix(['+', '-']).unwrap_or(number);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    number.parse::<f64>().ok().map(|value| value * multiplier)
}

/// Compare two keys known to differ in text
pub fn compare_keys(a: &[u8], b: &[u8], config: &SortConfig) -> Ordering {
    if config.numeric {
        if let (Some(x), Some(y)) = (parse_int(a), parse_int(b)) {
            return x.cmp(&y);
        }
    }

    if config.human_numeric {
        if let (Some(x), Some(y)) = (parse_human_numeric(a), parse_human_numeric(b)) {
            // `1000` and `1K` are equal in value but not in text.
            match x.total_cmp(&y) {
                Ordering::Equal => {}
                other => return other,
            }
        }
    }

    if config.month {
        if let (Some(x), Some(y)) = (parse_month(a), parse_month(b)) {
            return x.cmp(&y);
        }
    }

    a.cmp(b)
}

/// Compare two rows by their key sequences
pub fn compare_rows(a: &Row, b: &Row, config: &SortConfig) -> Ordering {
    a.keys
        .iter()
        .zip(&b.keys)
        .find(|(x, y)| x != y)
        .map(|(x, y)| compare_keys(x, y, config))
        .unwrap_or(Ordering::Equal)
}

/// Whether `a` sorts strictly before `b`
#[inline]
pub fn is_less(a: &Row, b: &Row, config: &SortConfig) -> bool {
    compare_rows(a, b, config) == Ordering::Less
}
