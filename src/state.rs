use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::export::write_export;
use crate::data::filter::{Criterion, FilterCriteria, FilterOptions};
use crate::data::loader::{LoadError, LoadedIssues, load_file};
use crate::data::model::IssueRecord;
use crate::data::store::IssueStore;
use crate::view::chart::ChartSlot;
use crate::view::detail::{DetailView, EditDraft};

pub const SAVE_NOTICE: &str = "Saved in memory. Use Export JSON to download changes.";

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Detail view hidden.
    #[default]
    None,
    Selected(i64),
}

/// Which selector a filter change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Severity,
    IssueType,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Loaded issues (empty until a load succeeds).
    pub store: IssueStore,

    /// File the issues came from.
    pub source: Option<PathBuf>,

    /// Current selector values.
    pub criteria: FilterCriteria,

    /// Values offered by the selectors.
    pub options: FilterOptions,

    pub selection: Selection,

    /// Edit form contents for the selected issue.
    pub draft: EditDraft,

    /// Trend chart of the selected issue.
    pub chart: ChartSlot,

    /// Load failure shown instead of the table.
    pub load_error: Option<String>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Confirmation shown after a save until dismissed.
    pub notice: Option<String>,
}

impl AppState {
    // -- Loading --

    /// Load issues from `path`, replacing whatever was loaded before.
    pub fn load_from(&mut self, path: &Path) {
        match load_file(path) {
            Ok(loaded) => {
                log::info!(
                    "Loaded {} issues from {} ({} without id)",
                    loaded.issues.len(),
                    path.display(),
                    loaded.without_id
                );
                self.set_issues(loaded, Some(path.to_path_buf()));
            }
            Err(e) => self.load_failed(path, e),
        }
    }

    /// Ingest a newly loaded record set: no filter, first issue selected.
    pub fn set_issues(&mut self, loaded: LoadedIssues, source: Option<PathBuf>) {
        self.store = IssueStore::new(loaded.issues);
        self.options = self.store.options();
        self.criteria = FilterCriteria::default();
        self.source = source;
        self.load_error = None;
        self.notice = None;
        self.status_message = (loaded.without_id > 0).then(|| {
            format!(
                "{} record(s) without an id cannot be selected",
                loaded.without_id
            )
        });
        self.select_first_filtered();
    }

    /// Enter the error state: nothing loaded, message instead of the table.
    pub fn load_failed(&mut self, path: &Path, err: LoadError) {
        log::error!("Could not load {}: {err}", path.display());
        *self = AppState {
            load_error: Some(format!(
                "Error: could not load {}. {err}",
                path.display()
            )),
            ..AppState::default()
        };
    }

    // -- Filtering --

    /// Change one selector and re-run the filter.
    pub fn set_filter(&mut self, field: FilterField, value: Criterion) {
        let slot = match field {
            FilterField::Status => &mut self.criteria.status,
            FilterField::Severity => &mut self.criteria.severity,
            FilterField::IssueType => &mut self.criteria.issue_type,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        self.apply_filters();
    }

    /// Re-filter, then select the first visible issue (or nothing).
    pub fn apply_filters(&mut self) {
        self.store.refilter(&self.criteria);
        log::debug!(
            "Filters {:?}: {} of {} issues",
            self.criteria,
            self.store.filtered_len(),
            self.store.len()
        );
        self.select_first_filtered();
    }

    fn select_first_filtered(&mut self) {
        match self.store.first_selectable() {
            Some(id) => {
                self.select(id);
            }
            None => self.clear_selection(),
        }
    }

    // -- Selection --

    /// Select an issue by id. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: i64) -> bool {
        let Some(issue) = self.store.find(id) else {
            log::debug!("No issue with id {id}");
            return false;
        };
        self.draft = EditDraft::from_issue(issue);
        self.chart.replace(Some(issue));
        self.selection = Selection::Selected(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
        self.draft = EditDraft::default();
        self.chart.replace(None);
    }

    pub fn selected_issue(&self) -> Option<&IssueRecord> {
        match self.selection {
            Selection::Selected(id) => self.store.find(id),
            Selection::None => None,
        }
    }

    /// Whether the detail panel is shown.
    pub fn detail_visible(&self) -> bool {
        self.selected_issue().is_some()
    }

    /// Detail view of the selection, `None` when hidden.
    pub fn detail(&self) -> Option<DetailView> {
        let Selection::Selected(id) = self.selection else {
            return None;
        };
        self.store.find(id).map(|issue| DetailView::from_issue(id, issue))
    }

    // -- Editing --

    /// Write the draft onto the selected record in place, then refresh the
    /// filtered subset and selector options. The selection is kept.
    pub fn save_edit(&mut self) -> bool {
        let Selection::Selected(id) = self.selection else {
            return false;
        };
        let Some(issue) = self.store.get_mut(id) else {
            return false;
        };
        issue.set_status(self.draft.status);
        issue.set_solution(&self.draft.solution);
        log::info!("Saved issue #{id}: status {}", self.draft.status);

        self.store.refilter(&self.criteria);
        self.options = self.store.options();
        self.select(id);
        self.notice = Some(SAVE_NOTICE.to_string());
        true
    }

    // -- Export --

    pub fn export_to(&mut self, path: &Path) -> Result<()> {
        write_export(path, self.store.issues())?;
        log::info!("Exported {} issues to {}", self.store.len(), path.display());
        self.status_message = Some(format!("Exported to {}", path.display()));
        Ok(())
    }
}
