//! Data models for the HR dashboard

pub mod category;
pub mod table;

pub use category::Category;
pub use table::HrTable;
