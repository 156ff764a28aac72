//! [`ServiceActions`] against an in-memory database, a fake channel source and canned model
//! replies.

use std::sync::{Arc, Mutex};

use analysis::{AnalysisService, AnalysisSettings};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use collector::{ChannelInfo, ChannelSource, CollectorError, SourceMessage, TelegramDataCollector};
use llm_client::{CompletionOptions, LlmClient};
use prompt::ChatMessage;
use serde_json::{json, Value};
use storage::Storage;
use telegram_bot::{ActionError, AnalyticsActions, PendingAction, ServiceActions};

struct CannedLlm {
    replies: Mutex<Vec<String>>,
}

#[async_trait]
impl LlmClient for CannedLlm {
    async fn get_llm_response_with_messages(
        &self,
        _messages: Vec<ChatMessage>,
        _options: CompletionOptions,
    ) -> anyhow::Result<String> {
        let mut replies = self.replies.lock().unwrap();
        Ok(if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies.first().cloned().unwrap_or_default()
        })
    }

    fn model(&self) -> &str {
        "canned"
    }
}

struct FakeSource;

#[async_trait]
impl ChannelSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn channel_info(&self, username: &str) -> Result<ChannelInfo, CollectorError> {
        match username {
            "rustnews" | "quiet" => Ok(ChannelInfo {
                tg_id: if username == "rustnews" { -1001 } else { -1002 },
                username: Some(username.to_string()),
                title: Some(username.to_uppercase()),
                description: None,
                member_count: Some(10),
            }),
            other => Err(CollectorError::ChannelNotFound(other.to_string())),
        }
    }

    async fn fetch_posts(
        &self,
        username: &str,
        limit: usize,
        _offset_date: Option<chrono::DateTime<Utc>>,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        if username != "rustnews" {
            return Ok(Vec::new());
        }
        let now = Utc::now();
        Ok((1..=3)
            .rev()
            .map(|id| SourceMessage::new(id, now - Duration::hours(id), format!("post {}", id)))
            .take(limit)
            .collect())
    }
}

async fn actions(replies: &[Value]) -> (ServiceActions, TelegramDataCollector) {
    let storage = Storage::connect("sqlite::memory:")
        .await
        .expect("Failed to create storage");
    let llm = Arc::new(CannedLlm {
        replies: Mutex::new(replies.iter().map(Value::to_string).collect()),
    });
    let analysis = AnalysisService::new(storage.clone(), llm, AnalysisSettings::default());
    let collector = TelegramDataCollector::new(storage, Arc::new(FakeSource));
    (ServiceActions::new(collector.clone(), analysis), collector)
}

fn channel_analysis() -> Value {
    json!({
        "main_topics": ["релизы", "async"],
        "top_posts": [{"id": 1}],
        "audience_sentiment": "позитивное",
        "recommendations": ["чаще"],
        "content_ideas": ["обзор", "интервью"]
    })
}

/// **Test: channel analysis resolves the channel, analyzes stored posts and summarizes.**
#[tokio::test]
async fn test_analyze_channel_summary() {
    let (actions, collector) = actions(&[channel_analysis()]).await;
    let channel = collector.resolve_channel("rustnews").await.unwrap();
    collector.collect_posts(&channel, 10, None).await.unwrap();

    let summary = actions
        .perform(&PendingAction::AnalyzeChannel {
            username: "rustnews".to_string(),
        })
        .await
        .unwrap();

    assert!(summary.contains("Анализ канала @rustnews завершен!"));
    assert!(summary.contains("Основные темы: релизы, async"));
    assert!(summary.contains("Создано 2 идей"));
}

/// **Test: content plan summary lists the number of days and the first three titles in order.**
#[tokio::test]
async fn test_content_plan_summary() {
    let plan = json!({
        "day_1": {"title": "Первый"},
        "day_2": {"title": "Второй"},
        "day_3": {"title": "Третий"},
        "day_4": {"title": "Четвертый"}
    });
    let (actions, collector) = actions(&[channel_analysis(), plan]).await;
    let channel = collector.resolve_channel("rustnews").await.unwrap();
    collector.collect_posts(&channel, 10, None).await.unwrap();

    let summary = actions
        .perform(&PendingAction::ContentPlan {
            username: "rustnews".to_string(),
            days: 7,
        })
        .await
        .unwrap();

    assert!(summary.starts_with("Контент-план для канала @rustnews на 4 дней создан!"));
    assert!(summary.contains("• День 1: Первый\n• День 2: Второй\n• День 3: Третий\n"));
    assert!(!summary.contains("Четвертый"));
}

/// **Test: a channel without posts yields the analysis error; unknown channels the collector error.**
#[tokio::test]
async fn test_errors_propagate() {
    let (actions, _collector) = actions(&[channel_analysis()]).await;

    let err = actions
        .perform(&PendingAction::Survey {
            username: "quiet".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::Analysis(_)));
    assert_eq!(err.to_string(), "No posts found for analysis");

    let err = actions
        .perform(&PendingAction::AnalyzeChannel {
            username: "missing".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ActionError::Collector(CollectorError::ChannelNotFound(_))
    ));
}
