// src/environment.rs
use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LISTINGS_HOST: &str = "in.linkedin.com";

/// Process-environment configuration, read once at startup. The completion
/// credential lives here and is handed down explicitly; nothing else in the
/// crate touches the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
    pub listings_host: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let port = match std::env::var("JOBPULSE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("JOBPULSE_PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let listings_host = std::env::var("JOBPULSE_LISTINGS_HOST")
            .unwrap_or_else(|_| DEFAULT_LISTINGS_HOST.to_string());

        info!("Loaded configuration: port={}, listings_host={}", port, listings_host);

        Ok(Self {
            port,
            openai_api_key,
            listings_host,
        })
    }
}
