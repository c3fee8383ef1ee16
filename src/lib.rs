//! Desktop viewer for electrical consumption issues.
//!
//! Loads a JSON array of issue records, shows them in a filterable table with
//! an editable detail panel and a monthly usage chart, and exports the edited
//! set back to JSON.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
pub mod view;
