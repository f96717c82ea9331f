use crate::routes::analyze::interfaces::{ImageDimensions, LabeledColor, UploadForm, UploadResponse};
use crate::routes::{analyze, root};
use color_analysis::{ColorCategory, ColorName, ExtractedColor};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        analyze::handlers::upload_file_handler,
    ),
    components(
        schemas(
            UploadForm,
            UploadResponse,
            ImageDimensions,
            LabeledColor,
            ExtractedColor,
            ColorName,
            ColorCategory,
        ),
    ),
    tags(
        (name = "Garment Colors", description = "Dominant color extraction and color combination advice for clothing photos"),
        (name = "Analyze", description = "Upload a photo and get its colors and suggestions"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
