pub mod color_info;
pub mod distance;
pub mod matcher;
pub mod palette_store;

pub use color_info::{color_info, contrasting_text_color, is_light_color, ColorInfo};
pub use distance::{ColorDistance, DistanceError, DistanceStrategy, PerceptualDistance};
pub use matcher::{ColorMatcher, FAMILY_SUGGESTION_COUNT};
pub use palette_store::PaletteStore;
