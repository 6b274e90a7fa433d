//! Key extraction: turns each input line into a [`Row`].
//!
//! Lines are raw bytes. Valid UTF-8 lines split on Unicode whitespace; lines
//! with invalid sequences split on ASCII whitespace and are otherwise kept
//! byte for byte.

use crate::config::SortConfig;

/// An input line paired with the keys it is compared by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Line bytes exactly as read, written back unchanged
    pub original: Vec<u8>,
    /// Comparison keys in priority order
    pub keys: Vec<Vec<u8>>,
}

impl Row {
    /// Build a row for `line`, extracting its keys under `config`
    pub fn new(line: Vec<u8>, config: &SortConfig) -> Self {
        let keys = extract_keys(&line, config);
        Self {
            original: line,
            keys,
        }
    }
}

#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Strip surrounding whitespace from a line
pub fn trim_blanks(line: &[u8]) -> &[u8] {
    if let Ok(text) = std::str::from_utf8(line) {
        return text.trim().as_bytes();
    }

    let start = line.iter().position(|&b| !is_blank(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|&b| !is_blank(b)).map_or(start, |pos| pos + 1);
    &line[start..end]
}

/// Split a line into its non-empty whitespace-separated fields
pub fn fields(line: &[u8]) -> Vec<&[u8]> {
    match std::str::from_utf8(line) {
        Ok(text) => text.split_whitespace().map(str::as_bytes).collect(),
        Err(_) => line
            .split(|&b| is_blank(b))
            .filter(|field| !field.is_empty())
            .collect(),
    }
}

/// Extract the comparison keys of a single line.
///
/// With `key_column == 0` every whitespace-separated field is a key, in order.
/// Otherwise the result holds just the requested field, or nothing when the
/// line is too short to have it.
pub fn extract_keys(line: &[u8], config: &SortConfig) -> Vec<Vec<u8>> {
    let line = if config.ignore_blanks { trim_blanks(line) } else { line };
    let fields = fields(line);

    if config.whole_line() {
        return fields.into_iter().map(<[u8]>::to_vec).collect();
    }

    fields
        .get(config.key_column - 1)
        .map(|field| vec![field.to_vec()])
        .unwrap_or_default()
}

/// Build rows for every line, preserving input order
pub fn parse_rows(lines: Vec<Vec<u8>>, config: &SortConfig) -> Vec<Row> {
    lines
        .into_iter()
        .map(|line| Row::new(line, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(line: &[u8], config: &SortConfig) -> Vec<String> {
        extract_keys(line, config)
            .into_iter()
            .map(|key| String::from_utf8_lossy(&key).into_owned())
            .collect()
    }

    #[test]
    fn test_whole_line_keys() {
        let config = SortConfig::default();
        assert_eq!(keys(b"  banana   3\tx ", &config), vec!["banana", "3", "x"]);
        assert!(extract_keys(b"", &config).is_empty());
        assert!(extract_keys(b"   \t ", &config).is_empty());
    }

    #[test]
    fn test_unicode_whitespace_separates_fields() {
        let config = SortConfig::default();
        assert_eq!(keys("a\u{3000}b".as_bytes(), &config), vec!["a", "b"]);
    }

    #[test]
    fn test_single_column_key() {
        let config = SortConfig::new().with_key_column(2);
        assert_eq!(keys(b"apple 10 red", &config), vec!["10"]);
        assert_eq!(keys(b"   apple    10", &config), vec!["10"]);
    }

    #[test]
    fn test_column_past_end_yields_no_keys() {
        let config = SortConfig::new().with_key_column(3);
        assert!(extract_keys(b"apple 10", &config).is_empty());

        let row = Row::new(b"apple 10".to_vec(), &config);
        assert!(row.keys.is_empty());
        assert_eq!(row.original, b"apple 10");
    }

    #[test]
    fn test_ignore_blanks_keeps_original_text() {
        let config = SortConfig::new().with_key_column(1).with_ignore_blanks(true);
        let row = Row::new(b"  pear  ".to_vec(), &config);
        assert_eq!(row.keys, vec![b"pear".to_vec()]);
        assert_eq!(row.original, b"  pear  ");
    }

    #[test]
    fn test_latin1_line_splits_on_ascii_blanks() {
        let config = SortConfig::new().with_key_column(1);
        let row = Row::new(b"caf\xe9 2".to_vec(), &config);
        assert_eq!(row.keys, vec![b"caf\xe9".to_vec()]);
        assert_eq!(row.original, b"caf\xe9 2");

        assert_eq!(trim_blanks(b" \tna\xefve \r"), b"na\xefve");
        assert_eq!(trim_blanks(b"  "), b"");
    }

    #[test]
    fn test_parse_rows_preserves_order() {
        let config = SortConfig::default();
        let rows = parse_rows(vec![b"b 1".to_vec(), b"a 2".to_vec(), Vec::new()], &config);
        let originals: Vec<&[u8]> = rows.iter().map(|r| r.original.as_slice()).collect();
        assert_eq!(originals, vec![&b"b 1"[..], &b"a 2"[..], &b""[..]]);
        assert_eq!(rows[1].keys, vec![b"a".to_vec(), b"2".to_vec()]);
        assert!(rows[2].keys.is_empty());
    }
}
