use crate::analyze::error::AnalyzeError;
use crate::analyze::interfaces::{ImageDimensions, LabeledColor, Upload, UploadResponse};
use crate::api_state::ApiContext;
use axum::extract::Multipart;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use color_analysis::{ColorAnalysisError, decode_image, success_message};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task;
use tokio::time::timeout;
use tracing::{debug, info};

/// How long a request waits for a free analysis slot before giving up.
pub const ANALYSIS_QUEUE_TIMEOUT: Duration = Duration::from_secs(30);

/// Read the `file` field, and optionally a `num_colors` field, from a multipart body.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AnalyzeError> {
    let mut file = None;
    let mut num_colors = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(ToString::to_string);
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field.bytes().await?;
                file = Some((filename, content_type, bytes));
            }
            Some("num_colors") => {
                let text = field.text().await?;
                let text = text.trim();
                if !text.is_empty() {
                    let parsed = text
                        .parse::<usize>()
                        .map_err(|_| AnalyzeError::InvalidNumColors(text.to_string()))?;
                    num_colors = Some(parsed);
                }
            }
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    let (filename, content_type, bytes) = file.ok_or(AnalyzeError::MissingFile)?;
    let content_type = content_type.or_else(|| {
        filename
            .as_deref()
            .and_then(|f| mime_guess::from_path(f).first_raw())
            .map(ToString::to_string)
    });

    Ok(Upload {
        filename,
        content_type,
        bytes,
        num_colors,
    })
}

/// Decode and analyze an upload on the blocking pool, bounded by the analysis semaphore.
pub async fn analyze_upload(
    context: &ApiContext,
    upload: Upload,
    num_colors: Option<usize>,
) -> Result<UploadResponse, AnalyzeError> {
    let analyzer_settings = &context.settings.analyzer;
    let num_colors = num_colors.unwrap_or(analyzer_settings.num_colors);
    if !analyzer_settings.allows_num_colors(num_colors) {
        return Err(AnalyzeError::NumColorsOutOfRange {
            value: num_colors,
            max: analyzer_settings.max_colors,
        });
    }

    let permit = timeout(
        ANALYSIS_QUEUE_TIMEOUT,
        Arc::clone(&context.analysis_semaphore).acquire_owned(),
    )
    .await
    .map_err(|_| AnalyzeError::Busy)?
    .map_err(|_| AnalyzeError::Busy)?;

    let analyzer = Arc::clone(&context.analyzer);
    let locale = analyzer.locale();
    let bytes = upload.bytes.clone();
    let now = Instant::now();
    let (image_dimensions, analysis) = task::spawn_blocking(move || {
        let _permit = permit;
        let image = decode_image(&bytes)?;
        let dimensions = ImageDimensions {
            width: image.width(),
            height: image.height(),
        };
        let analysis = analyzer.analyze_with(image, num_colors)?;
        Ok::<_, ColorAnalysisError>((dimensions, analysis))
    })
    .await?
    .map_err(|source| AnalyzeError::Analysis { source, locale })?;

    info!(
        width = image_dimensions.width,
        height = image_dimensions.height,
        colors = analysis.extracted_colors.len(),
        "Analyzed upload in {:?}",
        now.elapsed()
    );

    let image_preview = context
        .settings
        .api
        .include_preview
        .then(|| preview_data_url(&upload));
    let classified_colors = analysis
        .classified_colors
        .iter()
        .map(|color| LabeledColor::new(color, locale))
        .collect();

    Ok(UploadResponse {
        filename: upload.filename,
        content_type: upload.content_type,
        image_dimensions,
        extracted_colors: analysis.extracted_colors,
        classified_colors,
        color_suggestions: analysis.suggestions,
        message: success_message(locale).to_string(),
        image_preview,
    })
}

fn preview_data_url(upload: &Upload) -> String {
    let mime = upload
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(&upload.bytes))
}
