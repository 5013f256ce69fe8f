use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use weather_api::config::{API_KEY_ENV, DOTENV_FILE, load_dotenv};
use weather_api::{AppState, LoggingConfig, OpenWeatherClient, WeatherApiConfig, web};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn log_startup_banner(config: &WeatherApiConfig) {
    let public_url = config.server.public_url.trim_end_matches('/');

    info!("🌤️ Starting Weather API v{}", weather_api::VERSION);
    if config.provider.has_placeholder_key() {
        warn!(
            "⚠️ API key not configured. Set {} in the environment or {} (or provider.api_key) to a real OpenWeatherMap key",
            API_KEY_ENV, DOTENV_FILE
        );
    } else {
        info!("📡 API key status: Loaded");
    }
    info!("🌐 Listening on {}", config.server.bind_address());
    info!("📝 Available endpoints:");
    for path in ["/", "/api/health", "/api/test", "/api/weather/current?city=London"] {
        info!("   - {}{}", public_url, path);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv(Path::new(DOTENV_FILE));
    let config = WeatherApiConfig::load()?;

    init_tracing(&config.logging);
    match dotenv {
        Ok(true) => info!("Loaded environment from {}", DOTENV_FILE),
        Ok(false) => {}
        Err(e) => warn!("Ignoring {}: {:#}", DOTENV_FILE, e),
    }
    log_startup_banner(&config);

    let provider = OpenWeatherClient::new(config.provider.clone())?;
    let state = AppState::new(Arc::new(provider), &config.server.public_url);

    web::run(&config.server, state).await
}
