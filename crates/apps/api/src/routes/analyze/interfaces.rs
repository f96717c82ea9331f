use axum::body::Bytes;
use color_analysis::{
    ClassifiedColor, ColorCategory, ColorName, ExtractedColor, Locale, Pixel, category_label,
    category_of, color_label,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadParams {
    /// How many dominant colors to extract, defaults to the configured amount.
    pub num_colors: Option<usize>,
}

/// Multipart body of `POST /uploadfile`.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// The image to analyze.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Alternative to the `num_colors` query parameter for plain HTML forms.
    pub num_colors: Option<usize>,
}

/// The uploaded file as read from the multipart body.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    pub num_colors: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// A classified color with its name and category in the configured language.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct LabeledColor {
    #[schema(value_type = Vec<u8>)]
    pub rgb: Pixel,
    pub name: ColorName,
    pub label: String,
    pub category: ColorCategory,
    pub category_label: String,
    pub percentage: f64,
}

impl LabeledColor {
    #[must_use]
    pub fn new(color: &ClassifiedColor, locale: Locale) -> Self {
        let category = category_of(color.name);
        Self {
            rgb: color.rgb,
            name: color.name,
            label: color_label(color.name, locale).to_string(),
            category,
            category_label: category_label(category, locale).to_string(),
            percentage: color.percentage,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UploadResponse {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub image_dimensions: ImageDimensions,
    pub extracted_colors: Vec<ExtractedColor>,
    pub classified_colors: Vec<LabeledColor>,
    pub color_suggestions: Vec<String>,
    pub message: String,
    /// `data:` URL of the uploaded image, only when previews are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_preview: Option<String>,
}
