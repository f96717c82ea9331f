use color_analysis::Locale;
use serde::Deserialize;

/// Settings as they appear in `config/settings.yaml` and `APP__*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub analyzer: AnalyzerSettings,
    pub api: RawApiSettings,
    pub logging: LoggingSettings,
}

/// How uploaded images are analyzed.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Dominant colors to extract when a request doesn't ask for a specific amount.
    pub num_colors: usize,
    /// Upper bound for the `num_colors` a request may ask for.
    pub max_colors: usize,
    /// Images wider than this are downscaled before clustering.
    pub max_width: u32,
    /// Language of color labels and suggestions.
    pub locale: Locale,
    pub kmeans: KmeansSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct KmeansSettings {
    /// Fixed seed so identical uploads give identical colors.
    pub seed: u64,
    pub max_iterations: usize,
    pub convergence: f32,
    /// Restarts with consecutive seeds, the best clustering is kept.
    pub runs: usize,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct RawApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    /// Analyses allowed to run at once, defaults to the number of CPU cores.
    pub max_concurrent_analyses: Option<usize>,
    /// Send the upload back as a base64 data URL so the page can show it.
    pub include_preview: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub level: String,
}
