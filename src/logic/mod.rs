//! Core non-UI logic split into modular submodules.

pub mod dialog;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod schedule;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use dialog::{accept_lecture_batch, close_dialog, open_dialog};
pub use filter::{filter_lectures, matches, refresh_filtered, replace_lectures};
pub use pagination::{PAGE_SIZE, Pager, maybe_advance_page};
pub use schedule::{add_lecture_from_dialog, add_schedule, add_selected_to_schedule};
