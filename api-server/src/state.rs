//! Shared application state.

use std::time::Instant;

use analysis::AnalysisService;
use collector::TelegramDataCollector;
use storage::Storage;
use tga_core::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub storage: Storage,
    pub analysis: AnalysisService,
    /// `None` when no Telegram access is configured; collecting endpoints answer 503.
    pub collector: Option<TelegramDataCollector>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Storage,
        analysis: AnalysisService,
        collector: Option<TelegramDataCollector>,
    ) -> Self {
        Self {
            config,
            storage,
            analysis,
            collector,
            start_time: Instant::now(),
        }
    }

    pub(crate) fn collector(&self) -> Result<&TelegramDataCollector, crate::ApiError> {
        self.collector
            .as_ref()
            .ok_or(crate::ApiError::CollectorUnavailable)
    }
}
