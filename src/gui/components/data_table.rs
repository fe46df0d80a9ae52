// src/gui/components/data_table.rs
//
// Draws the final table. Purely a view over `Table`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::Table;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, table: &Table) {
    let cols = table.ncols().max(table.rows.first().map(|r| r.len()).unwrap_or(0));
    if cols == 0 {
        ui.centered_and_justified(|ui| { ui.label("No data yet"); });
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, table, cols));
}

/// Course names and the exam text column get room; the rest start narrow.
fn initial_width(ci: usize, cols: usize) -> f32 {
    if ci + 1 == cols { 480.0 }
    else if ci == 1 { 260.0 }
    else { 90.0 }
}

fn inner_table(ui: &mut egui::Ui, table: &Table, cols: usize) {
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        builder = builder.column(Column::initial(initial_width(ci, cols)).resizable(true).clip(true).at_least(20.0));
    }

    builder
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    let label = table.headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                    ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.nrows(), |mut row| {
                let Some(data) = table.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if let Some(cell) = data.get(ci) {
                            let resp = ui.label(cell.as_str());
                            if cell.len() > 40 {
                                resp.on_hover_text(cell.as_str());
                            }
                        }
                    });
                }
            });
        });
}
