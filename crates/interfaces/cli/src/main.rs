mod display;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paleluna_agent::AgentManager;
use paleluna_config::{AppConfig, DEFAULT_CONFIG_PATH};
use paleluna_game::Game;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Config warnings are emitted before the real filter is known.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        AppConfig::load_from(DEFAULT_CONFIG_PATH).unwrap_or_else(|err| {
            warn!(path = DEFAULT_CONFIG_PATH, %err, "unreadable config file; using defaults");
            AppConfig::default()
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config))
        .with_writer(io::stderr)
        .init();
    info!(
        enabled = config.ai.enabled,
        model = %config.ai.model,
        endpoint = %config.ai.ollama_url,
        "starting pale-luna"
    );

    let ai = Arc::new(config.ai);
    let mut game = Game::new(AgentManager::new(ai.clone()));
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    display::clear_screen(&mut stdout)?;
    display::show_title(&mut stdout)?;
    if game.state().first_time {
        display::show_introduction(&mut stdin, &mut stdout).await?;
        game.state_mut().first_time = false;
    }
    let ai_enabled = game.is_ai_enabled().await;
    display::show_ai_banner(ai_enabled, &ai.model, &mut stdout)?;

    game.setup_player(&mut stdin, &mut stdout).await?;
    game.run(&mut stdin, &mut stdout).await?;

    display::show_farewell(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level, which `PALE_LUNA_LOG` has
/// already overridden.
fn log_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.telemetry.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
