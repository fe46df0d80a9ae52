// src/bin/cli.rs
use unige_scrape::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
