use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{error, info, warn};

use otp_api::app::create_app;
use otp_api::config::build_state;
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger; tracing events from core and infra are forwarded here
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!(
        "Starting OTP Verify API Server ({} environment)",
        config.environment
    );
    for blocker in config.production_blockers() {
        error!("Configuration: {}", blocker);
    }
    for warning in config.production_warnings() {
        warn!("Configuration: {}", warning);
    }

    let state = web::Data::new(build_state(&config).context("failed to wire services")?);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
