// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Scrape").clicked() {
            app.scrape();
        }
        ui.separator();

        // --- Format ---
        let export = &mut app.options.export;
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty && export.is_default_path() {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        // --- Output field ---
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        let can_export = !app.table.is_empty();
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            app.export();
        }
    });
    ui.horizontal(|ui| {
        ui.label(app.status_text());
    });
    ui.add_space(4.0);
}
