use crate::compare::{compare_rows, is_less};
use crate::config::SortConfig;
use crate::key::{parse_rows, trim_blanks, Row};
use crate::row_store::{load_lines, write_lines};
use crate::SortResult;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::path::Path;

/// Row count from which sorting is spread over the rayon pool
const PARALLEL_THRESHOLD: usize = 8192;

/// What a run did to the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Check mode found the input in order; the file was not touched
    AlreadySorted,
    /// The file was rewritten with this many lines
    Written { lines: usize },
}

/// In-place sort pipeline: load, extract keys, order, post-process, write
pub struct CoreSort {
    config: SortConfig,
}

impl CoreSort {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Sort the file at `path` in place
    pub fn sort_file(&self, path: &Path) -> SortResult<SortOutcome> {
        let lines = load_lines(path)?;
        debug!("read {} lines from {}", lines.len(), path.display());

        match self.process(lines) {
            None => Ok(SortOutcome::AlreadySorted),
            Some(rows) => {
                write_lines(path, &rows)?;
                debug!("wrote {} lines to {}", rows.len(), path.display());
                Ok(SortOutcome::Written { lines: rows.len() })
            }
        }
    }

    /// Run every in-memory stage over `lines`.
    ///
    /// Returns `None` when check mode finds the input already sorted, otherwise
    /// the rows in output order.
    pub fn process(&self, lines: Vec<Vec<u8>>) -> Option<Vec<Row>> {
        let mut rows = parse_rows(lines, &self.config);
        debug!("extracted keys from {}", self.config.describe_keys());

        if self.config.check {
            match self.first_disorder(&rows) {
                None => return None,
                Some(index) => info!("disorder at line {}; sorting", index + 1),
            }
        }

        self.sort_rows(&mut rows);

        if self.config.reverse {
            rows.reverse();
        }

        if self.config.unique {
            let before = rows.len();
            rows = dedup_rows(rows, &self.config);
            debug!("removed {} duplicate lines", before - rows.len());
        }

        Some(rows)
    }

    /// Index of the first row that sorts before its predecessor
    pub fn first_disorder(&self, rows: &[Row]) -> Option<usize> {
        rows.iter()
            .tuple_windows()
            .position(|(prev, curr)| is_less(curr, prev, &self.config))
            .map(|pos| pos + 1)
    }

    /// Whether no row sorts before the one preceding it
    pub fn is_sorted(&self, rows: &[Row]) -> bool {
        self.first_disorder(rows).is_none()
    }

    /// Stable sort of `rows` under the configured comparator.
    ///
    /// Both paths use rayon's merge sort: the comparator need not be a total
    /// order, which the std sorts may panic on. Chunking depends only on the
    /// slice length, so the order is the same on one thread or many.
    pub fn sort_rows(&self, rows: &mut [Row]) {
        let compare = |a: &Row, b: &Row| compare_rows(a, b, &self.config);

        if rows.len() >= PARALLEL_THRESHOLD && num_cpus::get() > 1 {
            debug!("parallel sort of {} rows", rows.len());
            rows.par_sort_by(compare);
            return;
        }

        match ThreadPoolBuilder::new().num_threads(1).build() {
            Ok(pool) => pool.install(|| rows.par_sort_by(compare)),
            Err(err) => {
                debug!("single-thread pool unavailable ({err}); using global pool");
                rows.par_sort_by(compare);
            }
        }
    }
}

/// Keep the first row for each distinct line, in current order.
///
/// Lines are compared byte for byte. With blank trimming enabled, surrounding
/// whitespace is ignored as well, so `"a "` and `"a"` count as the same line;
/// this departs from plain exact matching on purpose.
pub fn dedup_rows(rows: Vec<Row>, config: &SortConfig) -> Vec<Row> {
    rows.into_iter()
        .unique_by(|row| {
            if config.ignore_blanks {
                trim_blanks(&row.original).to_vec()
            } else {
                row.original.clone()
            }
        })
        .collect()
}
