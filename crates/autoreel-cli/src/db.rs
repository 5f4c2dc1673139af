//! `db` subcommands. These bypass the API and talk to Postgres directly.

use std::path::PathBuf;

use autoreel_core::AppConfig;
use clap::Subcommand;
use sqlx::PgPool;

#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Load demo profiles, reels and logs from a YAML seed file
    Seed {
        /// Seed file path (defaults to AUTOREEL_SEED_PATH)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool_config = autoreel_db::PoolConfig::from_app_config(config);
    let pool = autoreel_db::connect_pool(config.require_database_url()?, pool_config).await?;
    Ok(pool)
}

pub(crate) async fn run_db(config: &AppConfig, command: DbCommands) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    match command {
        DbCommands::Ping => {
            autoreel_db::health_check(&pool).await?;
            println!("database ok");
        }
        DbCommands::Migrate => {
            let applied = autoreel_db::run_migrations(&pool).await?;
            println!("applied {applied} migration(s)");
        }
        DbCommands::Seed { path } => {
            let path = path.unwrap_or_else(|| config.seed_path.clone());
            let seed = autoreel_core::load_seed(&path)?;
            autoreel_db::run_migrations(&pool).await?;
            let summary = autoreel_db::seed_database(&pool, &seed, chrono::Utc::now()).await?;
            tracing::info!(
                path = %path.display(),
                profiles = summary.profiles,
                reels = summary.reels,
                logs = summary.logs_inserted,
                "seed complete"
            );
            println!(
                "seeded {} profile(s), {} reel(s), {} new log(s) from {}",
                summary.profiles,
                summary.reels,
                summary.logs_inserted,
                path.display()
            );
        }
    }
    pool.close().await;
    Ok(())
}
