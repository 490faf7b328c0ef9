//! Listener lifecycle.
//!
//! The scrape listener runs on a spawned task and the business listener on
//! the caller's task. Both stop when the shared `CancellationToken` fires;
//! `run` cancels it itself when the business side ends so the scrape task
//! never outlives it.
//!
//! Bind policy: the business bind is fatal. A failed scrape bind is logged
//! and the service keeps answering business traffic without `/metrics`.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use hellometrics_core::error::{HelloError, ListenerRole, Result};

use crate::app_state::AppState;
use crate::config::ServiceConfig;
use crate::router;

pub struct Server {
    state: AppState,
    business: TcpListener,
    scrape: Option<TcpListener>,
}

async fn bind_listener(role: ListenerRole, addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| HelloError::ListenerBind { role, addr, source })
}

impl Server {
    /// Bind both listeners. Only a business bind failure is returned.
    pub async fn bind(cfg: &ServiceConfig, state: AppState) -> Result<Self> {
        let scrape = match bind_listener(ListenerRole::Scrape, cfg.scrape_addr()).await {
            Ok(l) => Some(l),
            Err(e) => {
                tracing::error!(code = e.code().as_str(), error = %e, "scrape listener unavailable, serving without metrics");
                None
            }
        };
        let business = bind_listener(ListenerRole::Business, cfg.business_addr()).await?;
        Ok(Self { state, business, scrape })
    }

    pub fn business_addr(&self) -> Result<SocketAddr> {
        self.business
            .local_addr()
            .map_err(|e| HelloError::Internal(format!("business local_addr: {e}")))
    }

    /// `None` when the scrape listener could not bind.
    pub fn scrape_addr(&self) -> Option<SocketAddr> {
        self.scrape.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Serve until `shutdown` is cancelled or the business listener fails.
    pub async fn run(self, shutdown: CancellationToken) -> Result<()> {
        let scrape_task = self.scrape.map(|listener| {
            let app = router::build_scrape_router(self.state.clone());
            let token = shutdown.clone();
            if let Ok(addr) = listener.local_addr() {
                tracing::info!(%addr, "scrape listener serving /metrics");
            }
            tokio::spawn(async move {
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move { token.cancelled().await })
                    .await
            })
        });

        let app = router::build_business_router(self.state);
        if let Ok(addr) = self.business.local_addr() {
            tracing::info!(%addr, "business listener serving /hello");
        }
        let token = shutdown.clone();
        let served = axum::serve(self.business, app)
            .with_graceful_shutdown(async move { token.cancelled().await })
            .await;

        shutdown.cancel();
        if let Some(task) = scrape_task {
            match task.await {
                Ok(Ok(())) => tracing::debug!("scrape listener stopped"),
                Ok(Err(e)) => tracing::warn!(error = %e, "scrape listener ended with error"),
                Err(e) => tracing::error!(error = %e, "scrape task aborted"),
            }
        }

        served.map_err(|e| HelloError::Internal(format!("business listener failed: {e}")))?;
        tracing::info!("listeners stopped");
        Ok(())
    }
}
