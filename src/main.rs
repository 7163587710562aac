use anyhow::Result;
use clap::Parser;
use quill::cli::{Cli, Command};
use quill::{app, init_db_command, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quill=info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.instance, None)?;
    settings.ensure_instance_path()?;

    match cli.command {
        Command::InitDb => {
            let state = AppState::new(settings);
            init_db_command(&state.db).await?;
            println!("Initialized the database.");
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            let state = AppState::new(settings);
            let listener = TcpListener::bind(bind.as_str()).await?;
            tracing::info!(
                database = %state.settings.database.display(),
                "listening on {}",
                listener.local_addr()?
            );
            axum::serve(listener, app(state)).await?;
        }
    }
    Ok(())
}
