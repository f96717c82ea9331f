use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Load `config/settings.yaml` from the working directory, with `.env` and `APP__*` overrides.
pub fn load_app_settings() -> Result<AppSettings> {
    load_settings_from_path(Path::new("config/settings.yaml"), Some(Path::new(".env")))
}

pub fn load_settings_from_path(settings_file: &Path, env_file: Option<&Path>) -> Result<AppSettings> {
    if let Some(env_file) = env_file {
        // A missing .env is fine, the environment itself still applies.
        if dotenv::from_path(env_file).is_ok() {
            debug!("Loaded environment from {}", env_file.display());
        }
    }
    let config_path = settings_file.canonicalize()?;
    debug!("Loading settings from {}", config_path.display());

    build_settings(Config::builder().add_source(File::from(config_path)), app_environment())
}

/// Parse settings from YAML text, environment overrides still apply.
pub fn load_settings_from_str(yaml: &str) -> Result<AppSettings> {
    build_settings(
        Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml)),
        app_environment(),
    )
}

fn app_environment() -> Environment {
    Environment::with_prefix("APP")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("api.allowed_origins")
        .try_parsing(true)
}

fn build_settings(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    environment: Environment,
) -> Result<AppSettings> {
    let raw_settings = builder
        .add_source(environment)
        .build()?
        .try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
