use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use migration::MigratorTrait;
use rand::{rngs::StdRng, SeedableRng};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::customer::build_repository;

use crate::{routes, seed, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Connect the configured storage backend and wrap it in the customer service.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let db = match cfg.storage.backend {
        StorageBackend::Memory => None,
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await?;
                info!("migrations applied");
            }
            Some(db)
        }
    };
    let repo = build_repository(&cfg.storage, db)?;
    Ok(AppState::new(repo))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;

    if cfg.storage.seed_on_startup {
        seed::seed_random_customer(&state.customers, &mut StdRng::from_os_rng()).await?;
    }

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting customer api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
