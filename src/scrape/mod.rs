// src/scrape/mod.rs
mod catalog;
mod exam;

pub use catalog::fetch_catalog;
pub use exam::fetch_contents;
