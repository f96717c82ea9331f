use api::serve;
use app_state::load_app_settings;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LOG_FILTER: &str = "api=info,color_analysis=info,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(&settings.logging.level)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    serve(settings).await?;

    Ok(())
}
