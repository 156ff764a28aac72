//! tg-analytics: runs the Telegram bot, the HTTP API, a one-off channel collection, or bot and
//! API together.

mod cli;
mod components;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use api_server::{create_router, serve, AppState};
use clap::Parser;
use collector::TelegramDataCollector;
use telegram_bot::{build_handler_chain, run_dispatcher, ServiceActions, TelegramBotAdapter};
use tga_core::{init_tracing, normalize_channel_username, AppConfig};
use tracing::{error, info, warn};

use cli::{Cli, Mode};
use components::{build_components, Components};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match AppConfig::load().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_tracing(&config.base.log_file, &config.base.default_filter()) {
        eprintln!("Failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    info!(
        app_name = %config.base.app_name,
        version = %config.base.app_version,
        mode = ?cli.mode,
        "Starting"
    );

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let components = build_components(&config).await?;
    match cli.mode {
        Mode::Api => run_api(config, components).await,
        Mode::Bot => run_bot(components).await,
        Mode::Collector => {
            let channel = cli
                .channel
                .or_else(|| config.telegram.channel_username.clone())
                .context("Channel username is required: pass --channel or set CHANNEL_USERNAME")?;
            run_collector(components.collector, &channel, cli.limit).await
        }
        Mode::All => {
            if components.bot.is_none() {
                warn!("No bot token configured; running the API only");
                return run_api(config, components).await;
            }
            tokio::try_join!(run_api(config, components.clone()), run_bot(components))?;
            Ok(())
        }
    }
}

async fn run_api(config: AppConfig, components: Components) -> Result<()> {
    let address = config.api.bind_address();
    let state = Arc::new(AppState::new(
        config,
        components.storage,
        components.analysis,
        components.collector,
    ));
    serve(&address, create_router(state), async {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received");
    })
    .await
}

async fn run_bot(components: Components) -> Result<()> {
    let bot = components
        .bot
        .context("TG_BOT_TOKEN (or BOT_TOKEN) is required to run the bot")?;
    let collector = components
        .collector
        .context("Collector is unavailable without a bot token")?;

    let actions = Arc::new(ServiceActions::new(collector.clone(), components.analysis));
    let chain = build_handler_chain(Arc::new(TelegramBotAdapter::new(bot.clone())), actions);

    info!("Telegram bot starting");
    run_dispatcher(bot, chain, Some(collector)).await
}

async fn run_collector(
    collector: Option<TelegramDataCollector>,
    channel: &str,
    limit: usize,
) -> Result<()> {
    let collector =
        collector.context("TG_BOT_TOKEN (or BOT_TOKEN) is required to collect channel data")?;
    let username = normalize_channel_username(channel)
        .with_context(|| format!("Invalid channel username: {:?}", channel))?;

    let channel = collector.resolve_channel(&username).await?;
    let summary = collector.collect_channel(&channel, limit).await?;
    info!(
        channel = %channel.display_name(),
        posts = summary.posts,
        comments = summary.comments,
        "Collection complete"
    );
    Ok(())
}
