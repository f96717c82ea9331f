pub mod analyze;
mod api_doc;
pub mod root;

use crate::analyze::router::analyze_public_router;
use crate::api_state::ApiContext;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(root_public_router())
        .merge(analyze_public_router(
            api_state.settings.api.max_upload_bytes,
        ))
        .with_state(api_state)
}
