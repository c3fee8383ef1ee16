use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{severity_color, status_color};
use crate::data::model::IssueStatus;
use crate::state::AppState;
use crate::view::detail::{DetailView, HistoryRow};

use super::plot;

// ---------------------------------------------------------------------------
// Detail panel (right side)
// ---------------------------------------------------------------------------

/// Render the selected issue with its history, chart and edit form.
pub fn detail_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(view) = state.detail() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No issue selected.");
        });
        return;
    };
    let (severity, status) = state
        .selected_issue()
        .map(|i| {
            (
                i.severity().unwrap_or_default().to_string(),
                i.status().unwrap_or_default().to_string(),
            )
        })
        .unwrap_or_default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(&view.title);
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.label(RichText::new(&view.subtitle).weak());
                ui.label(RichText::new("●").color(severity_color(&severity)));
                ui.label(RichText::new("●").color(status_color(&status)));
            });
            ui.add_space(4.0);

            fields(ui, &view);

            if !view.history.is_empty() {
                ui.add_space(8.0);
                ui.strong("Monthly History");
                history_table(ui, view.id, &view.history);
            }

            if let Some(chart) = state.chart.current().filter(|c| c.issue_id == view.id) {
                ui.add_space(8.0);
                ui.strong("Usage Trend");
                plot::trend_chart(ui, chart);
            }

            ui.separator();
            edit_form(ui, state);
        });
}

fn fields(ui: &mut Ui, view: &DetailView) {
    egui::Grid::new(("detail_fields", view.id))
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in &view.fields {
                ui.strong(*label);
                ui.add(egui::Label::new(value.as_str()).wrap());
                ui.end_row();
            }
        });
}

fn history_table(ui: &mut Ui, id: i64, history: &[HistoryRow]) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.4;
    ui.push_id(("history", id), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .columns(Column::auto().at_least(70.0), 2)
            .column(Column::remainder())
            .header(18.0, |mut header| {
                for title in ["Month", "Usage", "Status"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for entry in history {
                    body.row(text_height, |mut row| {
                        row.col(|ui| {
                            ui.label(&entry.month);
                        });
                        row.col(|ui| {
                            ui.label(&entry.usage);
                        });
                        row.col(|ui| {
                            ui.label(&entry.status);
                        });
                    });
                }
            });
    });
}

fn edit_form(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Status:");
        egui::ComboBox::from_id_salt("status_edit")
            .selected_text(state.draft.status.as_str())
            .show_ui(ui, |ui: &mut Ui| {
                for status in IssueStatus::ALL {
                    ui.selectable_value(&mut state.draft.status, status, status.as_str());
                }
            });
    });

    ui.label("Solution / Notes:");
    ui.add(
        egui::TextEdit::multiline(&mut state.draft.solution)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    if ui.button("Save (in-memory)").clicked() {
        state.save_edit();
    }
}
