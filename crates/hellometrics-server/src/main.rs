//! hellometrics service
//!
//! - `GET /hello`   on `<POD_IP>:3333` counts into the `hello` counter
//! - `GET /metrics` on `<POD_IP>:2223` exposes the registry
//! - SIGINT/SIGTERM stops both listeners

use std::process::ExitCode;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use hellometrics_core::error::Result;
use hellometrics_core::metrics::Registry;
use hellometrics_server::{app_state::AppState, config, config::ServiceConfig, logging, server::Server};

#[tokio::main]
async fn main() -> ExitCode {
    // No subscriber yet, so startup failures before it exists go to stderr.
    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("hellometrics: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&cfg) {
        eprintln!("hellometrics: {e}");
        return ExitCode::FAILURE;
    }

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "hellometrics failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: ServiceConfig) -> Result<()> {
    let registry = Arc::new(Registry::new());
    let state = AppState::new(registry)?;

    tracing::debug!(business = %cfg.business_addr(), scrape = %cfg.scrape_addr(), "binding listeners");
    let server = Server::bind(&cfg, state).await?;

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.cancel();
    });

    server.run(shutdown).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, stopping listeners");
}
