// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, ScrapeOptions},
    core::{Fetcher, PageSource},
    data::{self, Table},
    error::{ExportError, ScrapeError},
    file,
    progress::{self, Progress},
    scrape,
};

/// Counts gathered along the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rows_extracted: usize,
    pub rows_kept: usize,
    pub links: usize,
    pub contents_found: usize,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: RunStats,
    pub table: Table,
    /// Where the table went, or why it did not.
    pub export: Result<PathBuf, ExportError>,
}

/// Top-level runner: scrape, filter, fetch, merge, export.
/// Only a client that cannot be built is an error; everything downstream degrades and is reported.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let (table, stats) = scrape(&opts.scrape, progress::reborrow(&mut progress))?;

    let export = file::export_table(&table, &opts.export);
    match &export {
        Ok(path) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Saved {}", path.display()));
            }
        }
        Err(ExportError::NoData) => {
            logw!("Export: no rows survived; nothing written");
            if let Some(p) = progress.as_deref_mut() {
                p.log("No data to export");
            }
        }
        Err(e) => {
            loge!("Export: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Export failed: {e}"));
            }
        }
    }

    Ok(RunSummary { stats, table, export })
}

/// Scrape over HTTP: catalog fetches keep TLS checks on, course fetches follow the options.
pub fn scrape(
    scrape_opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<(Table, RunStats), ScrapeError> {
    let catalog_src = Fetcher::new(scrape_opts.timeout, false)?;
    let course_src = Fetcher::new(scrape_opts.timeout, scrape_opts.accept_invalid_certs)?;
    Ok(collect(scrape_opts, &catalog_src, &course_src, progress))
}

/// Everything up to (not including) export, over any page sources.
pub fn collect(
    scrape_opts: &ScrapeOptions,
    catalog_src: &dyn PageSource,
    course_src: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> (Table, RunStats) {
    let layout = &scrape_opts.layout;

    let catalog = scrape::fetch_catalog(catalog_src, &scrape_opts.url, layout, progress::reborrow(&mut progress));
    if catalog.is_empty() {
        logw!("Catalog: nothing extracted from {}", scrape_opts.url);
    }
    let rows_extracted = catalog.rows.len();

    let mut headers = catalog.headers;
    headers.push(s!(layout.exam_column));

    let kept = data::filter_rows(&catalog.rows, &scrape_opts.blacklist);
    let rows_kept = kept.len();
    logf!("Filter: kept {rows_kept} of {rows_extracted} rows");

    let contents = scrape::fetch_contents(course_src, &catalog.links, layout.exam_labels, progress::reborrow(&mut progress));
    let contents_found = contents.iter().filter(|c| !c.is_empty()).count();
    logf!("Exam: {contents_found} of {} course pages had an exam section", contents.len());

    let rows = data::merge(kept, &catalog.links, &contents, scrape_opts.merge);

    let stats = RunStats {
        rows_extracted,
        rows_kept,
        links: catalog.links.len(),
        contents_found,
    };
    (Table::new(headers, rows), stats)
}
