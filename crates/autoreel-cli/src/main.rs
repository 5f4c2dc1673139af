mod db;
mod pages;

use std::io::Write;
use std::process::ExitCode;

use autoreel_client::AutoreelClient;
use autoreel_core::{AppConfig, CommandPalette, ReelStatus, TimeRange};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::db::DbCommands;
use crate::pages::{
    AnalyticsPage, DashboardPage, LogsPage, Page, PageState, ProfilesPage, ReelsPage,
};

#[derive(Debug, Parser)]
#[command(name = "autoreel-cli")]
#[command(about = "AutoReel command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Product summary and navigation
    Home,
    /// Overview: totals, recent activity and top reels
    Dashboard,
    /// Monitored Instagram profiles
    Profiles,
    /// Tracked reels
    Reels {
        /// Only show reels with this status (pending, posted, failed)
        #[arg(long)]
        status: Option<ReelStatus>,
    },
    /// Engagement metrics, audience insights and daily chart
    Analytics {
        /// Reporting window (7d, 30d, 90d, 1y)
        #[arg(long, default_value = "7d")]
        range: TimeRange,
    },
    /// Application logs
    Logs {
        /// Filter by level (debug, info, warn, error)
        #[arg(long)]
        level: Option<String>,
        /// Maximum number of entries
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Effective client settings
    Settings,
    /// Search the command palette and open the selected page
    Open {
        /// Search terms matched against title, description and category
        query: Vec<String>,
        /// Move the selection down this many entries (wraps)
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = autoreel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries page output; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None | Some(Commands::Home) => {
            print!("{}", pages::home::render());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Settings) => {
            print!("{}", pages::settings::render(&config));
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Db { command }) => {
            db::run_db(&config, command).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Open { query, skip }) => open(&config, &query.join(" "), skip).await,
        Some(command) => run_command(&config, command).await,
    }
}

async fn open(config: &AppConfig, query: &str, skip: usize) -> anyhow::Result<ExitCode> {
    let mut palette = CommandPalette::new();
    palette.set_query(query);
    for _ in 0..skip {
        palette.next();
    }

    let Some(selected) = palette.selected() else {
        println!("Nenhum comando encontrado");
        return Ok(ExitCode::FAILURE);
    };
    println!("> {} ({})\n", selected.title, selected.description);

    let command = match selected.id {
        "dashboard" => Commands::Dashboard,
        "profiles" => Commands::Profiles,
        "reels" => Commands::Reels { status: None },
        "analytics" => Commands::Analytics {
            range: TimeRange::default(),
        },
        "logs" => Commands::Logs {
            level: None,
            limit: 50,
        },
        "settings" => Commands::Settings,
        other => anyhow::bail!("palette command '{other}' has no page"),
    };

    if matches!(command, Commands::Settings) {
        print!("{}", pages::settings::render(config));
        return Ok(ExitCode::SUCCESS);
    }
    run_command(config, command).await
}

async fn run_command(config: &AppConfig, command: Commands) -> anyhow::Result<ExitCode> {
    let client = AutoreelClient::from_config(config)?;
    match command {
        Commands::Dashboard => show(&DashboardPage, &client).await,
        Commands::Profiles => show(&ProfilesPage, &client).await,
        Commands::Reels { status } => show(&ReelsPage { status }, &client).await,
        Commands::Analytics { range } => show(&AnalyticsPage { range }, &client).await,
        Commands::Logs { level, limit } => {
            let level = match level {
                Some(raw) => Some(
                    autoreel_core::logs::normalize_level(&raw)
                        .ok_or_else(|| anyhow::anyhow!("unknown log level '{raw}'"))?
                        .to_string(),
                ),
                None => None,
            };
            show(&LogsPage { level, limit }, &client).await
        }
        other => anyhow::bail!("{other:?} is not an API page"),
    }
}

async fn show<P: Page>(page: &P, client: &AutoreelClient) -> anyhow::Result<ExitCode> {
    let mut stdout = std::io::stdout();
    let state = pages::run(page, client, &mut stdout, chrono::Utc::now()).await?;
    stdout.flush()?;
    Ok(match state {
        PageState::Failed(_) => ExitCode::FAILURE,
        PageState::Loading | PageState::Ready(_) => ExitCode::SUCCESS,
    })
}

#[cfg(test)]
mod tests;
