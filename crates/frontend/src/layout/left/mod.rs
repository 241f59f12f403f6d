pub mod left;
pub mod sidebar;

pub use left::Left;
pub use sidebar::Sidebar;
