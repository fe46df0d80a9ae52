// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;

use super::consts::*;
use crate::core::html::Step;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where things live on the catalog and course pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub table_path: &'static [Step],
    pub multi_value_column: usize,
    pub exam_labels: &'static [&'static str],
    pub exam_column: &'static str,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            table_path: TABLE_PATH,
            multi_value_column: MULTI_VALUE_COLUMN,
            exam_labels: EXAM_LABELS,
            exam_column: EXAM_COLUMN,
        }
    }
}

/// How fetched exam texts are paired with filtered rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum MergeStrategy {
    /// Each row gets the texts of the links found in that same row.
    #[default]
    ByRow,
    /// The i-th kept row gets the i-th fetched text, whatever row it came from.
    Positional,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub blacklist: Vec<String>,
    pub merge: MergeStrategy,
    pub timeout: Duration,
    /// Skip TLS certificate checks on course-page fetches.
    pub accept_invalid_certs: bool,
    pub layout: PageLayout,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(BASE_URL),
            blacklist: BLACKLIST.iter().map(|t| s!(*t)).collect(),
            merge: MergeStrategy::default(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            accept_invalid_certs: false,
            layout: PageLayout::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// User-chosen path; `None` means `output.<ext>` in the working directory.
    out_path: Option<PathBuf>,
    /// Open the table viewer after exporting.
    pub show: bool,
}

impl ExportOptions {
    /// Final path. A user path keeps its own extension; the default follows the format.
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(join!(DEFAULT_OUT_STEM, ".", self.format.ext())),
        }
    }

    /// Set from user text. Trailing separator means "directory": default file name inside it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }
        let p = Path::new(s);
        self.out_path = if s.ends_with('/') || s.ends_with('\\') {
            Some(p.join(join!(DEFAULT_OUT_STEM, ".", self.format.ext())))
        } else {
            Some(p.to_path_buf())
        };
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("output.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("output.tsv"));
        assert!(export.is_default_path());
    }

    #[test]
    fn user_path_keeps_its_extension() {
        let mut export = ExportOptions::default();
        export.set_path("out/courses.txt");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out/courses.txt"));
    }

    #[test]
    fn directory_hint_gets_default_file_name() {
        let mut export = ExportOptions::default();
        export.set_path("out/");
        assert_eq!(export.out_path(), Path::new("out/").join("output.csv"));

        export.set_path("   ");
        assert!(export.is_default_path());
    }

    #[test]
    fn default_scrape_options_carry_site_constants() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.url, BASE_URL);
        assert_eq!(opts.blacklist, vec!["insegnamenti", "ateneo"]);
        assert!(!opts.accept_invalid_certs);
        assert_eq!(opts.layout.multi_value_column, 5);
        assert_eq!(opts.layout.table_path.len(), 5);
    }
}
