//! Builds storage, the LLM-backed analysis service, the teloxide bot and the collector from
//! [`AppConfig`].

use std::sync::Arc;

use analysis::{AnalysisService, AnalysisSettings};
use anyhow::Result;
use collector::{BotApiSource, CompositeSource, TelegramDataCollector, WebPreviewSource};
use llm_client::{EnvLlmConfig, LlmClient, OpenAILlmClient};
use storage::Storage;
use tga_core::AppConfig;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct Components {
    pub storage: Storage,
    pub analysis: AnalysisService,
    /// Present when a bot token is configured.
    pub bot: Option<teloxide::Bot>,
    /// Bot API metadata plus web-preview history; needs `bot`.
    pub collector: Option<TelegramDataCollector>,
}

pub async fn build_components(config: &AppConfig) -> Result<Components> {
    let storage = Storage::connect(&config.base.database_url)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.base.database_url,
                "Failed to initialize storage"
            );
            anyhow::anyhow!("Failed to initialize storage: {}", e)
        })?;
    info!(database_url = %config.base.database_url, "Storage initialized");

    let llm_config = EnvLlmConfig::from_env();
    if !llm_config.has_api_key() {
        warn!("OPENAI_API_KEY is not set; analysis requests will fail");
    }
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&llm_config));
    info!(model = %llm.model(), base_url = %llm_config.openai_base_url, "LLM client ready");
    let analysis = AnalysisService::new(storage.clone(), llm, AnalysisSettings::default());

    let bot = config.telegram.bot_token.as_deref().map(|token| {
        let bot = teloxide::Bot::new(token);
        match config.telegram.telegram_api_url.as_deref() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    });

    let collector = match &bot {
        Some(bot) => {
            let history = WebPreviewSource::new(config.telegram.telegram_web_url.clone())?;
            let source = CompositeSource::new(
                Arc::new(BotApiSource::new(bot.clone())),
                Arc::new(history),
            );
            Some(TelegramDataCollector::new(storage.clone(), Arc::new(source)))
        }
        None => {
            warn!("No bot token configured; collector is disabled");
            None
        }
    };

    Ok(Components {
        storage,
        analysis,
        bot,
        collector,
    })
}
