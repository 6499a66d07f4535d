pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod lookup;
pub mod snapshot_fetch;
pub mod utils;

// Re-export commonly used items
pub use app::BandtreeApp;
pub use args::Args;
pub use colors::ColorScheme;
pub use display::{SearchOutcome, SearchRequest, display_search_info, display_search_results};
pub use lookup::{NameLookup, build_name_lookup, find_musician_id};
pub use utils::{format_number, format_release_label};
