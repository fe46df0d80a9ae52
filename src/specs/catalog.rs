// src/specs/catalog.rs
//
// Catalog table → headers, rows, links.
//
// Row shape: one string per <td>, left to right. A cell made of <span>s is
// the span/anchor texts joined with " " (or ", " in the multi-value column).
// Every anchor href found in a span becomes a Link tagged with its row.

use scraper::ElementRef;
use url::Url;

use crate::config::options::PageLayout;
use crate::core::html::{self, child_elements, own_text};

/// A course-page URL and the index of the (unfiltered) row it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub row: usize,
    pub url: String,
}

/// Everything one extraction pass yields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub links: Vec<Link>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Extract the catalog table from a full page. `base` resolves relative hrefs.
pub fn extract_catalog(html_doc: &str, base: Option<&Url>, layout: &PageLayout) -> Catalog {
    let doc = html::parse(html_doc);
    let Some(table) = html::select_path(&doc, layout.table_path) else {
        loge!("Catalog: table not found at the expected position; page layout changed?");
        return Catalog::default();
    };
    read_table(table, base, layout)
}

/// Extract from an already located `<table>`.
pub fn read_table(table: ElementRef, base: Option<&Url>, layout: &PageLayout) -> Catalog {
    let mut trs = html::table_rows(table);

    let headers = match trs.first().map(|tr| header_cells(*tr)) {
        Some(h) if !h.is_empty() => {
            trs.remove(0);
            h
        }
        _ => {
            logw!("Catalog: no header row found");
            Vec::new()
        }
    };

    let mut rows = Vec::with_capacity(trs.len());
    let mut links = Vec::new();

    for (row_ix, tr) in trs.into_iter().enumerate() {
        let cells: Vec<String> = child_elements(tr, "td")
            .enumerate()
            .map(|(col, td)| read_cell(td, col, row_ix, base, layout, &mut links))
            .collect();
        rows.push(cells);
    }

    logd!("Catalog: headers={} rows={} links={}", headers.len(), rows.len(), links.len());
    Catalog { headers, rows, links }
}

fn header_cells(tr: ElementRef) -> Vec<String> {
    child_elements(tr, "th").map(own_text).collect()
}

fn read_cell(
    td: ElementRef,
    col: usize,
    row: usize,
    base: Option<&Url>,
    layout: &PageLayout,
    links: &mut Vec<Link>,
) -> String {
    let mut spans = child_elements(td, "span").peekable();
    if spans.peek().is_none() {
        return own_text(td);
    }

    let mut parts: Vec<String> = Vec::new();
    for span in spans {
        for a in child_elements(span, "a") {
            match a.value().attr("href") {
                Some(href) => links.push(Link { row, url: resolve_href(base, href) }),
                None => logd!("Catalog: anchor without href (row {row}, col {col})"),
            }
            parts.push(own_text(a));
        }
        parts.push(own_text(span));
    }
    parts.retain(|p| !p.is_empty());

    let sep = if col == layout.multi_value_column { ", " } else { " " };
    parts.join(sep)
}

fn resolve_href(base: Option<&Url>, href: &str) -> String {
    let href = href.trim();
    base.and_then(|b| b.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| s!(href))
}
