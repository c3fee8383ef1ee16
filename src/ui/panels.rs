use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export::EXPORT_FILE_NAME;
use crate::data::filter::{Criterion, WILDCARD};
use crate::state::{AppState, FilterField, Selection};
use crate::view::summary::SummaryStats;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and issue picker
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.store.is_empty() {
        ui.label("No issues loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the combo boxes.
    let options = state.options.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            filter_combo(ui, state, FilterField::Status, "Status", &options.statuses);
            filter_combo(ui, state, FilterField::Severity, "Severity", &options.severities);
            filter_combo(ui, state, FilterField::IssueType, "Type", &options.issue_types);

            ui.separator();
            ui.strong("Issue");
            issue_picker(ui, state);
        });
}

fn filter_combo(
    ui: &mut Ui,
    state: &mut AppState,
    field: FilterField,
    label: &str,
    values: &[String],
) {
    let current = match field {
        FilterField::Status => state.criteria.status.clone(),
        FilterField::Severity => state.criteria.severity.clone(),
        FilterField::IssueType => state.criteria.issue_type.clone(),
    };

    ui.strong(label);
    let mut picked = None;
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == Criterion::All, WILDCARD)
                .clicked()
            {
                picked = Some(Criterion::All);
            }
            for value in values {
                let criterion = Criterion::Exactly(value.clone());
                if ui
                    .selectable_label(current == criterion, value)
                    .clicked()
                {
                    picked = Some(criterion);
                }
            }
        });
    ui.add_space(6.0);

    if let Some(criterion) = picked {
        state.set_filter(field, criterion);
    }
}

fn issue_picker(ui: &mut Ui, state: &mut AppState) {
    let entries: Vec<(i64, String)> = state
        .store
        .filtered()
        .filter_map(|i| {
            let id = i.id()?;
            let location = i.location().unwrap_or("Unknown");
            Some((id, format!("Issue #{id} — {location}")))
        })
        .collect();

    let selected_text = match state.selection {
        Selection::Selected(id) => entries
            .iter()
            .find(|(e, _)| *e == id)
            .map(|(_, l)| l.clone())
            .unwrap_or_else(|| format!("Issue #{id}")),
        Selection::None => "None".to_string(),
    };

    let mut picked: Option<Selection> = None;
    egui::ComboBox::from_id_salt("issue_picker")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selection == Selection::None, "None")
                .clicked()
            {
                picked = Some(Selection::None);
            }
            for (id, label) in &entries {
                let sel = Selection::Selected(*id);
                if ui.selectable_label(state.selection == sel, label).clicked() {
                    picked = Some(sel);
                }
            }
        });

    match picked {
        Some(Selection::Selected(id)) => {
            state.select(id);
        }
        Some(Selection::None) => state.clear_selection(),
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = !state.store.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export JSON…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.store.is_empty() {
            ui.label(format!(
                "{} issues loaded, {} visible",
                state.store.len(),
                state.store.filtered_len()
            ));
            ui.separator();
            if ui.button("Export JSON").clicked() {
                export_file_dialog(state);
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::GRAY));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – summary statistics
// ---------------------------------------------------------------------------

pub fn summary_bar(ui: &mut Ui, state: &AppState) {
    let stats = SummaryStats::from_issues(state.store.issues());
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Summary");
        for (label, count) in stats.entries() {
            ui.separator();
            ui.label(format!("{label}: {count}"));
        }
    });
}

// ---------------------------------------------------------------------------
// Save confirmation
// ---------------------------------------------------------------------------

pub fn save_notice(ctx: &egui::Context, state: &mut AppState) {
    let Some(msg) = state.notice.clone() else {
        return;
    };
    let mut dismissed = false;
    egui::Window::new("Saved")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(msg);
            ui.vertical_centered(|ui: &mut Ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
    if dismissed {
        state.notice = None;
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open consumption issues")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Export issues")
        .add_filter("JSON", &["json"])
        .set_file_name(EXPORT_FILE_NAME);
    if let Some(dir) = state
        .source
        .as_deref()
        .and_then(|p| p.parent())
        .filter(|d| !d.as_os_str().is_empty())
    {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.save_file() {
        if let Err(e) = state.export_to(&path) {
            log::error!("Failed to export: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
