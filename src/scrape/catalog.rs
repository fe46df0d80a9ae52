// src/scrape/catalog.rs
use url::Url;

use crate::{
    config::options::PageLayout,
    core::PageSource,
    progress::Progress,
    specs::catalog::{self, Catalog},
};

/// Fetch the catalog page and extract its table.
/// A failed fetch is logged and yields an empty catalog.
pub fn fetch_catalog(
    source: &dyn PageSource,
    url: &str,
    layout: &PageLayout,
    mut progress: Option<&mut dyn Progress>,
) -> Catalog {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching catalog…");
    }

    let html = match source.get(url) {
        Ok(html) => html,
        Err(e) => {
            loge!("Catalog: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Catalog page unavailable: {e}"));
            }
            return Catalog::default();
        }
    };

    let base = Url::parse(url).ok();
    let cat = catalog::extract_catalog(&html, base.as_ref(), layout);
    logf!("Catalog: {} rows, {} links", cat.rows.len(), cat.links.len());
    cat
}
