#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod analyzer;
mod classify;
mod clothing_area;
mod combinations;
mod conversion;
mod dominant_colors;
mod error;
mod image_input;
mod structs;
mod text;

pub use analyzer::{ColorAnalysis, ColorAnalyzer};
pub use classify::{HUE_BANDS, HueBand, classify_color, classify_extracted_colors, classify_hsv};
pub use clothing_area::{ClothingAreaDetector, WholeImage};
pub use combinations::{Mood, Staple, Suggestion, category_of, suggest, suggest_color_combinations};
pub use conversion::{HUE_MAX, rgb_to_hsv};
pub use dominant_colors::{ExtractionOptions, MAX_CLUSTERS, extract_dominant_colors};
pub use error::{ColorAnalysisError, Result};
pub use image_input::{decode_image, raster_from_raw};
pub use structs::*;
pub use text::{
    Locale, category_label, color_label, invalid_image_message, render_suggestion,
    success_message,
};
