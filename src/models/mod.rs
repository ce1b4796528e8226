pub mod config;
pub mod match_result;
pub mod palette_entry;

pub use config::MatchConfig;
pub use match_result::{similarity, MatchResult};
pub use palette_entry::PaletteEntry;
