use app_state::{AnalyzerSettings, AppSettings};
use color_analysis::ColorAnalyzer;
use axum::extract::FromRef;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub analyzer: Arc<ColorAnalyzer>,
    /// Bounds how many images are analyzed at the same time.
    pub analysis_semaphore: Arc<Semaphore>,
}

impl ApiContext {
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let analyzer = ColorAnalyzer::new(
            settings.analyzer.extraction_options(),
            settings.analyzer.locale,
        );
        let analysis_semaphore = Arc::new(Semaphore::new(settings.api.max_concurrent_analyses));

        Self {
            settings,
            analyzer: Arc::new(analyzer),
            analysis_semaphore,
        }
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for AnalyzerSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.analyzer.clone()
    }
}

impl FromRef<ApiContext> for Arc<ColorAnalyzer> {
    fn from_ref(state: &ApiContext) -> Self {
        Arc::clone(&state.analyzer)
    }
}
