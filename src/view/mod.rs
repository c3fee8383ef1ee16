//! Pure projections from records to what the UI draws. Nothing here touches egui.

pub mod chart;
pub mod detail;
pub mod format;
pub mod summary;
pub mod table;
