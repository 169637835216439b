//! nexttrack - streaming music recommendation client
//!
//! Sends one hardcoded recommendation request and renders the server's event
//! stream as it arrives. No flags; the endpoint comes from NEXTTRACK_API_URL
//! or defaults to localhost:3000. Ctrl+C stops the stream cleanly.

use anyhow::Result;
use nexttrack_cli::{ApiConfig, Dispatcher, RecommendClient, StdoutSink};
use nexttrack_common::{Preferences, RecommendRequest};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered events stay clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting nexttrack v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::from_env();
    info!("Recommendation service: {}", config.base_url);

    let request = RecommendRequest::new(
        vec![
            "Bohemian Rhapsody Queen".to_string(),
            "Stairway to Heaven Led Zeppelin".to_string(),
        ],
        Preferences::new(0.7, 0.3, 0.8)?,
    )?;

    println!("Requesting recommendations seeded from:");
    for seed in &request.tracks {
        println!("  - {}", seed);
    }
    println!();

    let client = RecommendClient::new(&config.base_url)?;
    let mut dispatcher = Dispatcher::new(StdoutSink);

    let summary =
        nexttrack_cli::run_stream(&client, &request, &mut dispatcher, shutdown_signal()).await?;

    if summary.cancelled {
        info!("Stopped by operator");
    } else {
        info!(
            events = summary.events_dispatched,
            candidates = summary.candidates,
            terminal = summary.terminal.unwrap_or("none"),
            "Stream finished"
        );
    }

    // Server-reported Error events and early closes still exit 0; only
    // connectivity failure above yields a non-zero exit.
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
