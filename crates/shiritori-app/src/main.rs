use std::future::Future;
use std::sync::Arc;

use clap::Parser;
use shiritori_config::Config;
use shiritori_config::log::LogConfig;
use tokio::signal;
use tokio::task::JoinError;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod handler;
pub mod server;
pub mod state;

use self::controller::AppController;
use self::state::AppState;

#[cfg(test)]
mod tests {
    mod handler_tests;
    mod server_tests;
}

/// Shiritori word-chain service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Address to listen on (overrides SHIRITORI_BIND)
    #[arg(long)]
    bind: Option<String>,

    /// Word list file (overrides SHIRITORI_DICT_PATH)
    #[arg(long)]
    dict: Option<String>,

    /// Play a single turn, print the JSON reply and exit
    #[arg(long)]
    word: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(bind) = cli.bind {
        config.network.bind_addr = bind;
    }
    if let Some(dict) = cli.dict {
        config.dictionary.path = Some(dict);
    }

    init_tracing(&config.log);

    let state = Arc::new(AppState::new(config));

    if let Some(word) = cli.word {
        let record = state.play(&word, &mut rand::thread_rng());
        println!("{}", serde_json::to_string(&record)?);
        return Ok(());
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
        }
    };

    run(state, shutdown).await
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let outcome = tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        Some(result) = tasks.join_next() => {
            tracing::warn!("server task exited");
            flatten(result)
        }
    };

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Err(e) = flatten(result) {
            tracing::error!("task failed during shutdown: {e}");
        }
    }

    outcome
}

fn flatten(result: Result<anyhow::Result<()>, JoinError>) -> anyhow::Result<()> {
    result.map_err(anyhow::Error::from).and_then(|r| r)
}
