use anyhow::Context;

use mergington_activities::config::AppConfig;
use mergington_activities::{build_router, observability, AppState, RosterStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();
    let config = AppConfig::from_env()?;

    // Seeded once per process; nothing survives a restart
    let state = AppState::new(RosterStore::seeded(config.capacity));
    let capacity = state.roster.capacity_policy();
    let app = build_router(state, &config.static_dir);

    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(
        %addr,
        static_dir = %config.static_dir.display(),
        capacity = ?capacity,
        "activity service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown requested");
        })
        .await?;
    Ok(())
}
