use crate::analyze::error::AnalyzeError;
use crate::analyze::interfaces::{UploadForm, UploadParams, UploadResponse};
use crate::analyze::service::{analyze_upload, read_upload};
use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use tracing::instrument;

/// Upload a clothing photo and get its dominant colors, their names and combination suggestions.
///
/// The number of colors comes from the `num_colors` query parameter, the `num_colors` form
/// field, or the configured default, in that order.
#[utoipa::path(
    post,
    path = "/uploadfile",
    tag = "Analyze",
    params(UploadParams),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Colors, names and suggestions for the uploaded image.", body = UploadResponse),
        (status = 400, description = "The upload is not a readable image, the body is not multipart, or num_colors is invalid."),
        (status = 413, description = "The upload exceeds the size limit."),
        (status = 503, description = "Too many images are being analyzed right now."),
        (status = 500, description = "An internal error occurred."),
    )
)]
#[instrument(skip(context, params, multipart), err(Debug))]
pub async fn upload_file_handler(
    State(context): State<ApiContext>,
    params: Result<Query<UploadParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AnalyzeError> {
    let Query(params) = params?;
    let multipart = multipart?;
    let upload = read_upload(multipart).await?;
    let num_colors = params.num_colors.or(upload.num_colors);
    let response = analyze_upload(&context, upload, num_colors).await?;
    Ok(Json(response))
}
