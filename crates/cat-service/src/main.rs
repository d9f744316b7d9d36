use actor_framework::tracing::{directive_for_verbosity, setup_tracing};
use anyhow::Context;
use cat_service::config::ServerConfig;
use cat_service::controller::CatsController;
use cat_service::lifecycle::CatSystem;
use cat_service::presenter::HtmlPresenter;
use cat_service::routes::{route_table, router, AppState};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    if config.routes {
        print!("{}", route_table());
        return Ok(());
    }

    setup_tracing(directive_for_verbosity(config.verbose));

    let system = CatSystem::new(config.buffer_size);
    let presenter = HtmlPresenter::new().context("Failed to load templates")?;
    let state = AppState::new(CatsController::new(system.cat_client.clone()), presenter);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, stopping server");
}
