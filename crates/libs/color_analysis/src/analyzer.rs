use crate::classify::classify_extracted_colors;
use crate::clothing_area::{ClothingAreaDetector, WholeImage};
use crate::combinations::suggest_color_combinations;
use crate::dominant_colors::{ExtractionOptions, extract_dominant_colors};
use crate::text::Locale;
use crate::{ClassifiedColor, ExtractedColor, Result};
use image::RgbImage;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

/// Output of one pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAnalysis {
    pub extracted_colors: Vec<ExtractedColor>,
    pub classified_colors: Vec<ClassifiedColor>,
    pub suggestions: Vec<String>,
}

/// Runs clothing area detection, color extraction, classification and suggestions in order.
#[derive(Clone)]
pub struct ColorAnalyzer {
    options: ExtractionOptions,
    locale: Locale,
    detector: Arc<dyn ClothingAreaDetector>,
}

impl fmt::Debug for ColorAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorAnalyzer")
            .field("options", &self.options)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl ColorAnalyzer {
    #[must_use]
    pub fn new(options: ExtractionOptions, locale: Locale) -> Self {
        Self {
            options,
            locale,
            detector: Arc::new(WholeImage),
        }
    }

    #[must_use]
    pub fn with_detector(mut self, detector: impl ClothingAreaDetector + 'static) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    #[must_use]
    pub const fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Analyze with the configured number of colors.
    pub fn analyze(&self, image: RgbImage) -> Result<ColorAnalysis> {
        self.run(image, &self.options)
    }

    /// Analyze, looking for `num_colors` dominant colors instead of the configured amount.
    pub fn analyze_with(&self, image: RgbImage, num_colors: usize) -> Result<ColorAnalysis> {
        self.run(image, &self.options.with_num_colors(num_colors))
    }

    #[instrument(skip(self, image, options), fields(width = image.width(), height = image.height(), k = options.num_colors))]
    fn run(&self, image: RgbImage, options: &ExtractionOptions) -> Result<ColorAnalysis> {
        let now = Instant::now();
        let area = self.detector.identify_clothing_area(image);
        debug!("Clothing area identified in {:?}", now.elapsed());

        let now = Instant::now();
        let extracted_colors = extract_dominant_colors(&area, options)?;
        debug!("Dominant colors extracted in {:?}", now.elapsed());

        let now = Instant::now();
        let classified_colors = classify_extracted_colors(&extracted_colors);
        let suggestions = suggest_color_combinations(&classified_colors, self.locale);
        debug!(
            suggestions = suggestions.len(),
            "Colors classified and combined in {:?}",
            now.elapsed()
        );

        Ok(ColorAnalysis {
            extracted_colors,
            classified_colors,
            suggestions,
        })
    }
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new(ExtractionOptions::default(), Locale::default())
    }
}
