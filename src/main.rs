use portfolio_assets::{logger, server, Config, ImageProvider, OpenAIClient};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let config = Config::from_env();

    logger::init_with_config(logger::LoggerConfig::from_env(config.is_production()))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.bind_host(),
        config.bind_port(),
    );
    logger::log_config_info(&config);

    // Without a key the site still serves health and contact; generation
    // endpoints answer with a configuration error.
    let provider: Option<Arc<dyn ImageProvider>> = match OpenAIClient::new(&config.openai) {
        Ok(client) => {
            log::info!("✅ OpenAI client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            log::error!("❌ {}", e);
            None
        }
    };

    server::run(config, provider).await?;
    Ok(())
}
