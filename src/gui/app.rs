// src/gui/app.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    data::Table,
    file,
    runner::{self, RunSummary},
};

use super::{components, progress::GuiProgress};

/// Open an empty viewer; the user starts the scrape from the toolbar.
pub fn run(native: eframe::NativeOptions, options: AppOptions) -> eframe::Result<()> {
    eframe::run_native(
        "UniGe Course Scraper",
        native,
        Box::new(|_cc| Ok(Box::new(App::new(options, Table::default(), s!("Idle"))))),
    )
}

/// Open the viewer on the result of a finished CLI run.
pub fn show_table(options: AppOptions, summary: RunSummary) -> eframe::Result<()> {
    let status = match &summary.export {
        Ok(path) => format!("{} rows · saved to {}", summary.table.nrows(), path.display()),
        Err(e) => format!("{} rows · not saved: {e}", summary.table.nrows()),
    };
    eframe::run_native(
        "UniGe Course Scraper",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(App::new(options, summary.table, status)))),
    )
}

pub struct App {
    pub options: AppOptions,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // in-memory display
    pub table: Table,

    // status/progress (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(options: AppOptions, table: Table, status: String) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        logd!("Viewer: rows={} cols={}", table.nrows(), table.ncols());
        Self {
            options,
            out_path_text,
            out_path_dirty: false,
            table,
            status: Arc::new(Mutex::new(status)),
        }
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Synchronous scrape; the window is unresponsive until it returns.
    pub fn scrape(&mut self) {
        logf!("Scrape: Begin url={}", self.options.scrape.url);
        let mut prog = GuiProgress::new(self.status.clone());

        match runner::scrape(&self.options.scrape, Some(&mut prog)) {
            Ok((table, stats)) => {
                logf!("Scrape: OK rows={} kept={}", stats.rows_extracted, stats.rows_kept);
                self.table = table;
                self.status(format!(
                    "{} rows kept of {} · {} of {} course pages with exam text",
                    stats.rows_kept, stats.rows_extracted, stats.contents_found, stats.links
                ));
            }
            Err(e) => {
                loge!("Scrape: Error: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn export(&mut self) {
        if self.out_path_dirty {
            self.options.export.set_path(&self.out_path_text);
            self.out_path_dirty = false;
        }
        match file::export_table(&self.table, &self.options.export) {
            Ok(path) => self.status(format!("Exported {}", path.display())),
            Err(e) => {
                loge!("Export: Error: {e}");
                self.status(format!("Export error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::data_table::draw(ui, &self.table);
        });
    }
}
