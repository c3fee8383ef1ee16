use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{severity_color, status_color};
use crate::state::{AppState, Selection};
use crate::view::table::{COLUMN_TITLES, count_summary, table_rows};

// ---------------------------------------------------------------------------
// Issue table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered issues as a table. Clicking a row selects it.
pub fn issues_table(ui: &mut Ui, state: &mut AppState) {
    if let Some(err) = &state.load_error {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(err).color(Color32::RED));
        });
        return;
    }
    if state.store.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an issues file to begin  (File → Open…)");
        });
        return;
    }

    let rows = table_rows(state.store.filtered());
    ui.heading(count_summary(rows.len()));
    ui.separator();

    if rows.is_empty() {
        ui.label("No issues match the selected filters.");
        return;
    }

    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
    let selected = match state.selection {
        Selection::Selected(id) => Some(id),
        Selection::None => None,
    };
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(40.0).at_least(30.0))
        .columns(Column::initial(110.0).at_least(60.0).clip(true), COLUMN_TITLES.len() - 2)
        .column(Column::remainder().at_least(120.0).clip(true))
        .min_scrolled_height(0.0)
        .header(20.0, |mut header| {
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(text_height, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.set_selected(r.id.is_some() && selected == r.id);

                for (i, cell) in r.cells().into_iter().enumerate() {
                    row.col(|ui| {
                        let text = RichText::new(cell);
                        let text = match COLUMN_TITLES[i] {
                            "Severity" => text.color(severity_color(&r.severity)),
                            "Status" => text.color(status_color(&r.status)),
                            _ => text,
                        };
                        ui.label(text);
                    });
                }

                if row.response().clicked() {
                    clicked = r.id;
                }
            });
        });

    if let Some(id) = clicked {
        state.select(id);
    }
}
