mod app;
mod config;
mod handlers;
mod state;
mod storage;
#[cfg(test)]
mod testing;

use lambda_http::{run, service_fn, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::function_handler, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber. CloudWatch stamps every line, so the
    // formatter skips timestamps.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "familytree=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time(),
        )
        .init();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        table = %config.table_name,
        id_strategy = %config.id_strategy,
        return_created_id = config.return_created_id,
        "Starting familytree function"
    );

    // Built once per execution environment and shared by every invocation.
    let state = AppState::from_config(config).await;

    run(service_fn(|event| function_handler(&state, event))).await
}
