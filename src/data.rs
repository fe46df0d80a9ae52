// src/data.rs
//
// Row-level transforms between extraction and export:
// - filter_rows: normalize cells, drop empty and blacklisted rows.
// - merge: append the exam text column to each kept row.
// - Table: the final headers + rows handed to export and display.

use std::collections::HashMap;

use crate::config::options::MergeStrategy;
use crate::core::sanitize::{contains_ci, normalize, normalize_ws};
use crate::error::ExportError;
use crate::specs::catalog::Link;

/// A row that survived filtering, still knowing where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRow {
    /// Index in the unfiltered row list (matches `Link::row`).
    pub index: usize,
    pub cells: Vec<String>,
}

/// Final shape for export and display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn nrows(&self) -> usize { self.rows.len() }
    pub fn ncols(&self) -> usize { self.headers.len() }

    /// Every row must have exactly one cell per header.
    pub fn check_shape(&self) -> Result<(), ExportError> {
        let expected = self.headers.len();
        match self.rows.iter().position(|r| r.len() != expected) {
            Some(row) => Err(ExportError::Shape { row, expected, found: self.rows[row].len() }),
            None => Ok(()),
        }
    }
}

/// Normalize every cell; drop rows that are all empty or mention a blacklisted term.
/// Matching is a case-insensitive substring test on the space-joined row, so a
/// term inside a longer word still counts.
pub fn filter_rows<S: AsRef<str>>(rows: &[Vec<String>], blacklist: &[S]) -> Vec<CatalogRow> {
    let mut kept = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| normalize(Some(c.as_str()))).collect();

        if cells.iter().all(|c| c.is_empty()) {
            logd!("Filter: row {index} is empty");
            continue;
        }
        let joined = cells.join(" ");
        let matched = blacklist
            .iter()
            .map(|t| AsRef::<str>::as_ref(t))
            .find(|t| contains_ci(&joined, t));
        if let Some(term) = matched {
            logd!("Filter: row {index} dropped (matched '{term}')");
            continue;
        }
        kept.push(CatalogRow { index, cells });
    }
    kept
}

/// Append one exam text cell to every kept row.
///
/// `contents[i]` is the text fetched for `links[i]`.
pub fn merge(
    rows: Vec<CatalogRow>,
    links: &[Link],
    contents: &[String],
    strategy: MergeStrategy,
) -> Vec<Vec<String>> {
    match strategy {
        MergeStrategy::Positional => rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let extra = contents.get(i).map(|c| normalize_ws(c)).unwrap_or_default();
                with_cell(row.cells, extra)
            })
            .collect(),

        MergeStrategy::ByRow => {
            let mut by_row: HashMap<usize, Vec<String>> = HashMap::new();
            for (link, content) in links.iter().zip(contents) {
                let text = normalize_ws(content);
                if !text.is_empty() {
                    by_row.entry(link.row).or_default().push(text);
                }
            }
            rows.into_iter()
                .map(|row| {
                    let extra = by_row.remove(&row.index).map(|t| t.join(" ")).unwrap_or_default();
                    with_cell(row.cells, extra)
                })
                .collect()
        }
    }
}

fn with_cell(mut cells: Vec<String>, extra: String) -> Vec<String> {
    cells.push(extra);
    cells
}
