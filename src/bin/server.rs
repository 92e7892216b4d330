use std::{error::Error, fs::OpenOptions, path::Path, sync::Arc};

use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use ledger_rs::{
    Config, add_tracing_layer, build_router,
    db::{ConnectRetry, connect},
    graceful_shutdown,
    stores::sqlite::create_app_state,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    setup_logging(config.log_path.as_deref())?;

    let connection = connect(&config.db_path, ConnectRetry::default()).await?;
    let state = create_app_state(connection)?;

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state), &config.service_name);

    let addr = config.socket_addr();
    tracing::info!("{} listening on {}", config.service_name, addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

/// Log to stdout at `info` (or `RUST_LOG`), and everything at `debug` to
/// `log_path` if it is given.
fn setup_logging(log_path: Option<&Path>) -> Result<(), std::io::Error> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = match log_path {
        Some(log_path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_writer(Arc::new(log_file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}
