use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use runtime::{AppConfig, CliArgs, DatabaseConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;

mod openapi;
mod router;

/// Calculation BREAD service with user registration and login.
#[derive(Parser)]
#[command(name = "calc-server")]
#[command(about = "Calculation BREAD service")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    runtime::init_logging(&config.logging);
    tracing::info!("calc-server starting");

    if args.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

async fn connect_database(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    if let Some(max) = cfg.max_conns {
        opts.max_connections(max);
    }

    tracing::info!("Connecting to database: {}", cfg.url);
    Database::connect(opts)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", cfg.url))
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = connect_database(&config.database).await?;

    // Schema bootstrap; a managed deployment would run these out of band.
    accounts::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .context("accounts migrations failed")?;
    calculations::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .context("calculations migrations failed")?;

    let app = router::build(&db);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}
