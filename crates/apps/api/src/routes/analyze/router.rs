use crate::analyze::handlers::upload_file_handler;
use crate::api_state::ApiContext;
use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};

pub fn analyze_public_router(max_upload_bytes: usize) -> Router<ApiContext> {
    Router::new()
        .route("/uploadfile", post(upload_file_handler))
        .route("/uploadfile/", post(upload_file_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
