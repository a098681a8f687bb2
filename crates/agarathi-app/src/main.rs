use std::path::PathBuf;
use std::sync::Arc;

use agarathi_config::{Config, ProviderKind};
use clap::Parser;
use tokio::signal;

pub mod controller;
pub mod driver;
pub mod events;
pub mod logging;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;
use self::ui::UiMode;

#[derive(Parser, Debug)]
#[command(name = "agarathi", version, about = "Dictionary lookup with generated illustrations")]
struct Args {
    /// Look up a single term and exit
    term: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word source: structured or extract
    #[arg(long)]
    provider: Option<ProviderKind>,

    /// Dictionary language code
    #[arg(long)]
    language: Option<String>,

    /// Skip illustration requests
    #[arg(long)]
    no_illustration: bool,
}

impl Args {
    /// Flags win over file and environment values
    fn apply(&self, mut config: Config) -> Config {
        if let Some(provider) = self.provider {
            config.source.provider = provider;
        }
        if let Some(language) = &self.language {
            config.source.language = Some(language.clone());
        }
        if self.no_illustration {
            config.illustration.enabled = false;
        }
        config
    }

    fn mode(&self) -> UiMode {
        match &self.term {
            Some(term) => UiMode::OneShot(term.clone()),
            None => UiMode::Interactive,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let args = Args::parse();
    let config = args.apply(profile::load_config(args.config.as_deref())?);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(args.mode()).await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => tracing::warn!("no tasks running"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}
