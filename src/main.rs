use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use slack_gemini_bot::api::lambda::function_handler;
use slack_gemini_bot::api::server::run_server;
use slack_gemini_bot::api::AppState;
use slack_gemini_bot::core::config::AppConfig;
use slack_gemini_bot::worker::executor::{detect_executor, is_lambda_environment};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    slack_gemini_bot::setup_logging();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    info!(
        "Bot started. Allowed Channels: {}",
        config.allowed_channels.channels().join(", ")
    );
    if config.allowed_channels.is_empty() {
        warn!("ALLOWED_CHANNEL_ID is empty; mentions from every channel will be answered");
    }

    let lookup = |key: &str| env::var(key).ok();
    let state = Arc::new(
        AppState::from_config(&config, detect_executor(lookup))
            .context("failed to initialize clients")?,
    );

    if is_lambda_environment(lookup) {
        info!("Running under the Lambda runtime");
        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let state = state.clone();
            async move { function_handler(&state, event).await }
        }))
        .await
        .map_err(|e| anyhow::anyhow!("lambda runtime error: {e}"))?;
        return Ok(());
    }

    run_server(state, &config.bind_addr).await
}
