use crate::{AnalyzerSettings, LoggingSettings, RawApiSettings, RawSettings};
use color_analysis::{ExtractionOptions, MAX_CLUSTERS};
use color_eyre::eyre::{Report, bail};
use std::num::NonZeroUsize;
use std::thread::available_parallelism;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub analyzer: AnalyzerSettings,
    pub api: ApiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub max_concurrent_analyses: usize,
    pub include_preview: bool,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let analyzer = raw.analyzer;
        if analyzer.max_colors == 0 || analyzer.max_colors > MAX_CLUSTERS {
            bail!(
                "analyzer.max_colors must be between 1 and {MAX_CLUSTERS}, got {}",
                analyzer.max_colors
            );
        }
        if analyzer.num_colors == 0 || analyzer.num_colors > analyzer.max_colors {
            bail!(
                "analyzer.num_colors must be between 1 and analyzer.max_colors ({}), got {}",
                analyzer.max_colors,
                analyzer.num_colors
            );
        }
        if analyzer.kmeans.runs == 0 || analyzer.kmeans.max_iterations == 0 {
            bail!("analyzer.kmeans.runs and analyzer.kmeans.max_iterations must be positive");
        }

        Ok(Self {
            analyzer,
            api: raw.api.into(),
            logging: raw.logging,
        })
    }
}

impl From<RawApiSettings> for ApiSettings {
    fn from(raw: RawApiSettings) -> Self {
        let max_concurrent_analyses = raw
            .max_concurrent_analyses
            .filter(|&n| n > 0)
            .unwrap_or_else(|| available_parallelism().map_or(1, NonZeroUsize::get));

        Self {
            host: raw.host,
            port: raw.port,
            allowed_origins: raw.allowed_origins,
            max_upload_bytes: raw.max_upload_bytes,
            max_concurrent_analyses,
            include_preview: raw.include_preview,
        }
    }
}

impl AnalyzerSettings {
    /// Extraction options for requests that don't override the number of colors.
    #[must_use]
    pub fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            num_colors: self.num_colors,
            max_width: self.max_width,
            seed: self.kmeans.seed,
            max_iterations: self.kmeans.max_iterations,
            convergence: self.kmeans.convergence,
            runs: self.kmeans.runs,
        }
    }

    #[must_use]
    pub fn allows_num_colors(&self, num_colors: usize) -> bool {
        (1..=self.max_colors).contains(&num_colors)
    }
}

impl ApiSettings {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
