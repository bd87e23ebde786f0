//! `champ-service` binary: serves stdin/stdout until quit, end of input, or Ctrl-C

use anyhow::{Context, Result};
use champ_service::{Heuristic, ServiceConfig, Session, SessionEnd};
use tokio::io::BufReader;
use tracing::{info, warn};

fn main() -> Result<()> {
    champ_service::logging::init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let end = runtime.block_on(serve(ServiceConfig::from_env()));

    // A pending stdin read can't be cancelled; don't wait for it.
    runtime.shutdown_background();

    if let Some(SessionEnd::Fault(detail)) = end {
        anyhow::bail!("decision service stopped: {}", detail);
    }

    Ok(())
}

/// Serve stdin/stdout until the session ends or an interrupt arrives
async fn serve(config: ServiceConfig) -> Option<SessionEnd> {
    info!(default_backend = %config.default_backend, "starting decision service");

    let mut session = Session::new(config, Heuristic);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for interrupts");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        biased;
        _ = interrupt => {
            info!("interrupted");
            None
        }
        end = session.run(stdin, stdout) => Some(end),
    }
}
