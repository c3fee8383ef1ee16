use super::filter::{FilterCriteria, FilterOptions, apply_filters};
use super::model::IssueRecord;

// ---------------------------------------------------------------------------
// IssueStore – full record set + filtered subset
// ---------------------------------------------------------------------------

/// The loaded issues and the subset passing the current filters.
///
/// The subset is held as indices into `issues`, so a record edited through
/// [`IssueStore::get_mut`] is the same record the table, the export and the
/// next filter pass read.
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<IssueRecord>,
    filtered: Vec<usize>,
}

impl IssueStore {
    /// A store over `issues` with no filter applied.
    pub fn new(issues: Vec<IssueRecord>) -> Self {
        let filtered = (0..issues.len()).collect();
        IssueStore { issues, filtered }
    }

    pub fn issues(&self) -> &[IssueRecord] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues passing the last applied filters, in load order.
    pub fn filtered(&self) -> impl Iterator<Item = &IssueRecord> + '_ {
        self.filtered.iter().map(|&i| &self.issues[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Id of the first filtered record that has one.
    pub fn first_selectable(&self) -> Option<i64> {
        self.filtered().find_map(IssueRecord::id)
    }

    /// Recompute the filtered subset.
    pub fn refilter(&mut self, criteria: &FilterCriteria) {
        self.filtered = apply_filters(&self.issues, criteria);
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_issues(&self.issues)
    }

    /// Look up an issue by id: full set first, then the filtered subset.
    /// With duplicate ids the first match wins.
    pub fn find(&self, id: i64) -> Option<&IssueRecord> {
        self.position(id).map(|i| &self.issues[i])
    }

    /// Mutable access for in-place edits.
    pub fn get_mut(&mut self, id: i64) -> Option<&mut IssueRecord> {
        self.position(id).map(move |i| &mut self.issues[i])
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.issues
            .iter()
            .position(|x| x.id() == Some(id))
            .or_else(|| {
                self.filtered
                    .iter()
                    .copied()
                    .find(|&i| self.issues[i].id() == Some(id))
            })
    }
}
