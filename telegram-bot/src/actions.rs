//! Confirmed dialog actions: resolve the channel, run the analysis, summarize the result.

use analysis::{AnalysisError, AnalysisService, GeneratedPlan};
use async_trait::async_trait;
use collector::{CollectorError, TelegramDataCollector};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument};

use crate::dialog::PendingAction;

/// How many plan days, pros, cons and questions a summary lists.
const SUMMARY_ITEMS: usize = 3;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Collector(#[from] CollectorError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Runs a confirmed action and returns the summary text for the user.
#[async_trait]
pub trait AnalyticsActions: Send + Sync {
    async fn perform(&self, action: &PendingAction) -> Result<String, ActionError>;
}

/// [`AnalyticsActions`] backed by the collector and the analysis service.
pub struct ServiceActions {
    collector: TelegramDataCollector,
    analysis: AnalysisService,
}

impl ServiceActions {
    pub fn new(collector: TelegramDataCollector, analysis: AnalysisService) -> Self {
        Self {
            collector,
            analysis,
        }
    }
}

#[async_trait]
impl AnalyticsActions for ServiceActions {
    #[instrument(skip(self), fields(action = action.name()))]
    async fn perform(&self, action: &PendingAction) -> Result<String, ActionError> {
        let summary = match action {
            PendingAction::AnalyzeChannel { username } => {
                let channel = self.collector.resolve_channel(username).await?;
                let analysis = self.analysis.analyze_channel_content(channel.id).await?;
                format_channel_analysis(username, &analysis)
            }
            PendingAction::ContentPlan { username, days } => {
                let channel = self.collector.resolve_channel(username).await?;
                let plan = self.analysis.generate_content_plan(channel.id, *days).await?;
                format_content_plan(username, &plan)
            }
            PendingAction::AnalyzePost { post_id } => {
                let analysis = self.analysis.analyze_post_performance(*post_id).await?;
                format_post_analysis(*post_id, &analysis)
            }
            PendingAction::Survey { username } => {
                let channel = self.collector.resolve_channel(username).await?;
                let generated = self.analysis.generate_survey(channel.id).await?;
                format_survey(username, &generated.survey)
            }
        };
        info!(action = action.name(), "Action completed");
        Ok(summary)
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Renders a list item: strings as-is, anything else as JSON.
fn item_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn format_channel_analysis(username: &str, analysis: &Value) -> String {
    let topics = array_field(analysis, "main_topics")
        .iter()
        .map(item_text)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Анализ канала @{} завершен!\n\n\
         Основные темы: {}\n\
         Выявлено {} постов с наибольшим вовлечением\n\
         Настроение аудитории: {}\n\
         Создано {} идей для новых постов\n\n\
         Полные результаты доступны в веб-интерфейсе.",
        username,
        topics,
        array_field(analysis, "top_posts").len(),
        str_field(analysis, "audience_sentiment"),
        array_field(analysis, "content_ideas").len(),
    )
}

pub fn format_content_plan(username: &str, plan: &GeneratedPlan) -> String {
    let mut message = format!(
        "Контент-план для канала @{} на {} дней создан!\n\nПримеры тем:\n",
        username,
        plan.entries.len()
    );
    for (i, entry) in plan.entries.iter().take(SUMMARY_ITEMS).enumerate() {
        message.push_str(&format!("• День {}: {}\n", i + 1, entry.title));
    }
    message.push_str("\nПолный контент-план доступен в веб-интерфейсе.");
    message
}

pub fn format_post_analysis(post_id: i64, analysis: &Value) -> String {
    let pros_and_cons = analysis.get("pros_and_cons").unwrap_or(&Value::Null);
    let mut message = format!(
        "Анализ поста ID {} завершен!\n\n\
         Уровень вовлечения: {}\n\
         Тональность комментариев: {}\n\n\
         Сильные стороны:\n",
        post_id,
        str_field(analysis, "engagement_level"),
        str_field(analysis, "comments_sentiment"),
    );
    for pro in array_field(pros_and_cons, "pros").iter().take(SUMMARY_ITEMS) {
        message.push_str(&format!("• {}\n", item_text(pro)));
    }
    message.push_str("\nСлабые стороны:\n");
    for con in array_field(pros_and_cons, "cons").iter().take(SUMMARY_ITEMS) {
        message.push_str(&format!("• {}\n", item_text(con)));
    }
    message.push_str("\nПолные результаты анализа доступны в веб-интерфейсе.");
    message
}

pub fn format_survey(username: &str, survey: &Value) -> String {
    let questions = array_field(survey, "questions");
    let mut message = format!(
        "Опрос для аудитории канала @{} создан!\n\n\
         Название: {}\n\
         Количество вопросов: {}\n\n\
         Примеры вопросов:\n",
        username,
        str_field(survey, "title"),
        questions.len(),
    );
    for question in questions.iter().take(SUMMARY_ITEMS) {
        message.push_str(&format!("• {}\n", str_field(question, "question_text")));
    }
    message.push_str("\nОпрос доступен в веб-интерфейсе и готов к публикации.");
    message
}
