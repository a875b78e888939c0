use anyhow::Result;
use job_pulse::environment::AppConfig;
use job_pulse::web::start_web_server;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("job_pulse=info,rocket::server=off")),
        )
        .init();

    let config = AppConfig::load()?;

    info!("Starting JobPulse Job Trend Analysis API");
    info!("Listings host: {}", config.listings_host);
    info!("Server: http://0.0.0.0:{}", config.port);

    start_web_server(config).await
}
