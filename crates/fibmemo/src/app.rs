//! Application entry point: build the calculator, then serve.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use fibmemo_core::MemoizedCalculator;

use crate::config::AppConfig;
use crate::routes::{router, AppState};
use crate::version;

/// Run the service until Ctrl+C.
///
/// The calculator is fully built before the listener is bound, so no request
/// can observe a partially populated eager cache.
pub fn run(config: &AppConfig) -> Result<()> {
    let opts = config.calculator_options()?;
    let calculator = Arc::new(MemoizedCalculator::with_options(&opts)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        let addr = config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        serve(listener, calculator, shutdown_signal()).await
    })
}

/// Serve requests on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    calculator: Arc<MemoizedCalculator>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    info!(
        addr = %local,
        eager_limit = calculator.eager_limit(),
        version = %version::full_version(),
        "listening"
    );

    axum::serve(listener, router(AppState::new(calculator)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl+C, running until killed: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
