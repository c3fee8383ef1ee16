pub mod detail;
pub mod panels;
pub mod plot;
pub mod table;
