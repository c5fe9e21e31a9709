//! Command-line argument parsing and handling.

pub mod definition;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use definition::Args;
pub use search::{format_search_page, handle_search};
pub use utils::determine_log_level;
