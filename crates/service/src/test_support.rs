#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        eprintln!("skip: SKIP_DB_TESTS is set");
        return None;
    }
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    if cfg.url.trim().is_empty() {
        eprintln!("skip: DATABASE_URL not set");
        return None;
    }
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    Some(cfg)
}

/// Connection to the test database, or `None` when `DATABASE_URL` is unset.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = test_config() else { return Ok(None) };

    // Run migrations exactly once, with a throwaway connection
    let migrate_cfg = &cfg;
    MIGRATED
        .get_or_try_init(|| async move {
            let db = connect_with_config(migrate_cfg).await?;
            migration::Migrator::up(&db, None).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&cfg).await?;
    Ok(Some(db))
}
