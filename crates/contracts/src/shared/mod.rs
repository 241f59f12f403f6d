pub mod dashboard_section;
pub mod filters;
pub mod listing;
