//! todo-api CLI - serve the to-do JSON API

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_api::config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(version = "0.1.0")]
#[command(about = "Minimal to-do CRUD service backed by SQLite")]
#[command(long_about = r#"
todo-api serves a small JSON API for managing to-do items:
  POST   /todos/      create a to-do
  GET    /todos/      list to-dos (skip/limit query params)
  GET    /todos/{id}  fetch one to-do
  PUT    /todos/{id}  replace title, description and status
  DELETE /todos/{id}  delete and return the removed to-do

Example usage:
  todo-api init
  todo-api serve --port 8000 --database todos.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Origin allowed for cross-origin requests
        #[arg(long)]
        cors_origin: Option<String>,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Where to write the config
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, database, cors_origin, config } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();

            let port = port
                .or(file_config.port)
                .unwrap_or(config::DEFAULT_PORT);
            let database = database
                .or(file_config.database.map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);
            let cors_origin = cors_origin
                .or(file_config.cors_origin)
                .unwrap_or_else(|| config::DEFAULT_CORS_ORIGIN.to_string());

            config::ensure_db_dir(&database)?;
            tracing::info!("Serving {:?} on port {}", database, port);

            todo_api::server::start_server(port, database, &cors_origin).await?;
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            let config = config::TodoConfig {
                database: Some(config::default_database_path().display().to_string()),
                port: Some(config::DEFAULT_PORT),
                cors_origin: Some(config::DEFAULT_CORS_ORIGIN.to_string()),
            };
            config::write_config(&path, &config, force)?;
            println!("✅ Wrote config to {}", path.display());
        }
    }

    Ok(())
}
