use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::Router;
use color_eyre::Result;
use http::{HeaderValue, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// The full application: routes, state and middleware.
pub fn create_app(api_state: ApiContext) -> Router {
    let cors = cors_layer(&api_state.settings.api.allowed_origins);
    create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_origin(allowed_origins)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}

pub async fn serve(settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    let listen_address = settings.api.bind_address();
    info!(
        locale = ?settings.analyzer.locale,
        num_colors = settings.analyzer.num_colors,
        max_concurrent_analyses = settings.api.max_concurrent_analyses,
        "Color analyzer ready"
    );

    let app = create_app(ApiContext::new(settings));
    let listener = tokio::net::TcpListener::bind(&listen_address).await?;

    info!("📚 Docs available at http://{listen_address}/docs");
    info!("✅ Server listening on http://{listen_address}");

    axum::serve(listener, app).await?;
    Ok(())
}
