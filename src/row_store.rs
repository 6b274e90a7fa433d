//! Reading lines from the target file and rewriting it in place.

use crate::error::{SortContext, SortResult};
use crate::key::Row;
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read every line of `path` as raw bytes.
///
/// Lines end at `\n`; a trailing `\r` is dropped and a final unterminated line
/// is kept. No encoding is assumed.
pub fn load_lines(path: &Path) -> SortResult<Vec<Vec<u8>>> {
    let file = File::open(path).with_read_context(path)?;
    let len = file.metadata().with_read_context(path)?.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns;
    // every line is copied into an owned buffer first.
    let mmap = unsafe { Mmap::map(&file) }.with_read_context(path)?;
    Ok(parse_lines(&mmap))
}

fn parse_lines(data: &[u8]) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &byte) in data.iter().enumerate() {
        if byte == b'\n' {
            lines.push(strip_cr(&data[start..i]).to_vec());
            start = i + 1;
        }
    }

    // Handle last line if it doesn't end with newline
    if start < data.len() {
        lines.push(strip_cr(&data[start..]).to_vec());
    }

    lines
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Replace the contents of `path` with each row's original text, one per line.
///
/// The rows are written to a temporary file next to `path`, which is then
/// renamed over it, so an interrupted run leaves the old content intact.
pub fn write_lines(path: &Path, rows: &[Row]) -> SortResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(dir).with_write_context(path)?;
    {
        let mut output = BufWriter::new(temp.as_file());
        for row in rows {
            output.write_all(&row.original).with_write_context(path)?;
            output.write_all(b"\n").with_write_context(path)?;
        }
        output.flush().with_write_context(path)?;
    }
    temp.as_file().sync_all().with_write_context(path)?;

    // Temporary files are created private; keep whatever the target had.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).with_write_context(path)?;
    }

    temp.persist(path)
        .map_err(|err| err.error)
        .with_write_context(path)?;
    Ok(())
}
