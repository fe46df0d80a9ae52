// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use unige_scrape::{config::options::AppOptions, gui, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(false);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("UniGe Course Scraper")
            .with_inner_size([1200.0, 720.0]),
        ..Default::default()
    };

    gui::run(options, AppOptions::default())
        .map_err(|e| color_eyre::eyre::eyre!("GUI failed: {e}"))
}
