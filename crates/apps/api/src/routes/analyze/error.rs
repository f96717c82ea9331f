use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_analysis::{ColorAnalysisError, Locale, invalid_image_message};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("image analysis failed: {source}")]
    Analysis {
        source: ColorAnalysisError,
        locale: Locale,
    },

    #[error("No file was uploaded, expected a multipart field named \"file\".")]
    MissingFile,

    #[error("num_colors must be a whole number, got {0:?}.")]
    InvalidNumColors(String),

    #[error("num_colors must be between 1 and {max}, got {value}.")]
    NumColorsOutOfRange { value: usize, max: usize },

    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("expected a multipart/form-data upload: {0}")]
    NotMultipart(#[from] MultipartRejection),

    #[error("The server is busy analyzing other images, please try again later.")]
    Busy,

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Analysis { source, locale } => match source {
                ColorAnalysisError::InvalidImage(reason) => {
                    warn!("Rejected upload: {reason}");
                    (
                        StatusCode::BAD_REQUEST,
                        invalid_image_message(locale).to_string(),
                    )
                }
                ColorAnalysisError::InvalidParameter { .. } => {
                    (StatusCode::BAD_REQUEST, source.user_message())
                }
                ColorAnalysisError::Resize(reason) => {
                    error!("Image resize failed: {reason}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected internal error occurred.".to_string(),
                    )
                }
            },
            Self::MissingFile | Self::InvalidNumColors(_) | Self::NumColorsOutOfRange { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Multipart(err) => (err.status(), err.body_text()),
            Self::Query(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::NotMultipart(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::Busy => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            Self::Internal(err) => {
                error!("Internal error while analyzing upload: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected internal error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<tokio::task::JoinError> for AnalyzeError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(eyre::Report::new(err))
    }
}
