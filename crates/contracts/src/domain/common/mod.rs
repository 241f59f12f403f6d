//! Common wire helpers for all aggregates

pub mod wire_value;

// Re-exports
pub use wire_value::{
    de_flexible_count, de_flexible_f64, de_flexible_id, de_flexible_id_list, de_flexible_string, number_from_value,
    string_from_value,
};
