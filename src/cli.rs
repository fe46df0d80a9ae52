// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{BASE_URL, REQUEST_TIMEOUT_SECS};
use crate::config::options::{AppOptions, ExportFormat, MergeStrategy};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "unige_scrape", version, about = "Course catalog + exam modalities → CSV")]
pub struct Cli {
    /// Catalog page to scrape
    #[arg(long, default_value = BASE_URL)]
    pub url: String,

    /// Output file (a trailing '/' means "directory")
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Drop rows containing any of these terms (case-insensitive substring).
    /// Replaces the built-in list.
    #[arg(short, long, value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// How exam texts are paired with rows
    #[arg(long, value_enum, default_value_t = MergeStrategy::ByRow)]
    pub merge: MergeStrategy,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Do not verify TLS certificates of course pages
    #[arg(long)]
    pub insecure: bool,

    /// Open the table viewer when done
    #[cfg(feature = "gui")]
    #[arg(long)]
    pub show: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.url = self.url;
        let terms: Vec<String> = self
            .blacklist
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if !terms.is_empty() {
            opts.scrape.blacklist = terms;
        }
        opts.scrape.merge = self.merge;
        opts.scrape.timeout = Duration::from_secs(self.timeout);
        opts.scrape.accept_invalid_certs = self.insecure;

        opts.export.format = self.format;
        if let Some(out) = self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        #[cfg(feature = "gui")]
        {
            opts.export.show = self.show;
        }
        opts
    }
}

/// Prints one line per course page to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} course pages…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize, _url: &str) {
        self.done += 1;
        eprintln!("[{}/{}] ok", index + 1, self.total);
    }
    fn item_failed(&mut self, index: usize, url: &str, reason: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] no exam text for {url} ({reason})", index + 1, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Course pages: {} ok, {} without text", self.done, self.failed);
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.into_options();
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, Some(&mut progress))?;
    print_summary(&summary);

    #[cfg(feature = "gui")]
    if opts.export.show {
        crate::gui::show_table(opts, summary)
            .map_err(|e| color_eyre::eyre::eyre!("viewer failed: {e}"))?;
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let s = &summary.stats;
    println!(
        "Rows: {} extracted, {} kept | Course pages: {} linked, {} with exam text",
        s.rows_extracted, s.rows_kept, s.links, s.contents_found
    );
    match &summary.export {
        Ok(path) => println!("Data saved to {}", path.display()),
        Err(e) => println!("Nothing saved: {e}"),
    }
}
