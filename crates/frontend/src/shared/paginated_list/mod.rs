pub mod filters;
pub mod loader;
pub mod scroll;
pub mod state;

pub use filters::FilterCoordinator;
pub use loader::{spawn_load, ListLoader, ListingSource};
pub use scroll::{scroll_to_top, use_infinite_scroll, use_scroll_to_top_visible, ScrollTrigger};
pub use state::{ListState, LoadMode, LoadOutcome, LoadState};
