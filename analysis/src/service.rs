//! AnalysisService: loads channel data, asks the model, stores the results.

use std::sync::Arc;

use chrono::{Duration, Utc};
use llm_client::{CompletionOptions, LlmClient};
use prompt::AnalysisPrompt;
use serde_json::{json, Map, Value};
use storage::{
    AnalysisType, ContentPlan, NewAnalysis, NewContentPlan, NewSurvey, Storage, Survey,
    STATUS_DRAFT,
};
use tracing::{info, instrument, warn};

use crate::error::AnalysisError;
use crate::json_reply::parse_json_reply;
use crate::payload::{channel_post_entry, post_entry};

/// Longest content plan that can be requested.
pub const MAX_PLAN_DAYS: u32 = 31;

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    /// How many of the newest posts go into a channel analysis.
    pub posts_window: i64,
    /// Comments per post included in a channel analysis.
    pub comments_per_post: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            posts_window: 50,
            comments_per_post: 10,
        }
    }
}

/// A generated plan: the model's object and the stored day rows (ordered by day).
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: Value,
    pub entries: Vec<ContentPlan>,
}

#[derive(Debug, Clone)]
pub struct GeneratedSurvey {
    pub survey: Value,
    pub record: Survey,
}

#[derive(Clone)]
pub struct AnalysisService {
    storage: Storage,
    llm: Arc<dyn LlmClient>,
    settings: AnalysisSettings,
}

impl AnalysisService {
    pub fn new(storage: Storage, llm: Arc<dyn LlmClient>, settings: AnalysisSettings) -> Self {
        Self {
            storage,
            llm,
            settings,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Analyzes the newest posts of a channel and stores the result as `channel_content`.
    ///
    /// A reply that is not JSON is kept as `{"analysis": <text>}`.
    #[instrument(skip(self))]
    pub async fn analyze_channel_content(&self, channel_id: i64) -> Result<Value, AnalysisError> {
        let posts = self
            .storage
            .posts()
            .list_by_channel(channel_id, self.settings.posts_window, 0)
            .await?;
        if posts.is_empty() {
            return Err(AnalysisError::NoPosts);
        }

        let mut entries = Vec::with_capacity(posts.len());
        for post in &posts {
            let comments = self.storage.comments().list_by_post(post.id, None, 0).await?;
            let reactions = self.storage.reactions().list_by_post(post.id).await?;
            entries.push(channel_post_entry(
                post,
                &comments,
                &reactions,
                self.settings.comments_per_post,
            ));
        }

        let prompt = prompt::channel_analysis(&Value::Array(entries));
        let reply = self.complete(&prompt).await?;
        let analysis = parse_json_reply(&reply).unwrap_or_else(|| {
            warn!(channel_id, "Channel analysis reply is not JSON, storing raw text");
            json!({ "analysis": reply })
        });

        self.storage
            .analyses()
            .insert(&NewAnalysis {
                channel_id: Some(channel_id),
                post_id: None,
                analysis_type: AnalysisType::ChannelContent,
                content: analysis.clone(),
            })
            .await?;

        info!(channel_id, posts = posts.len(), "Channel analysis completed");
        Ok(analysis)
    }

    /// Builds a `days`-day plan from the latest channel analysis (running one if none exists)
    /// and stores one draft row per `day_N` entry, dated today + N-1 days.
    #[instrument(skip(self))]
    pub async fn generate_content_plan(
        &self,
        channel_id: i64,
        days: u32,
    ) -> Result<GeneratedPlan, AnalysisError> {
        if !(1..=MAX_PLAN_DAYS).contains(&days) {
            return Err(AnalysisError::InvalidInput(format!(
                "days must be between 1 and {}, got {}",
                MAX_PLAN_DAYS, days
            )));
        }

        let analysis = self.latest_or_fresh_analysis(channel_id).await?;
        let prompt = prompt::content_plan(&analysis, days);
        let reply = self.complete(&prompt).await?;
        let plan = parse_json_reply(&reply).ok_or(AnalysisError::Parse { raw: reply })?;

        let object = plan.as_object().ok_or_else(|| {
            AnalysisError::InvalidResponse("content plan is not a JSON object".to_string())
        })?;

        let today = Utc::now();
        let mut entries = Vec::new();
        for (day, entry) in plan_days(object) {
            let Some(title) = entry.get("title").and_then(Value::as_str) else {
                warn!(channel_id, day, "Content plan entry without title skipped");
                continue;
            };
            let saved = self
                .storage
                .content_plans()
                .insert(&NewContentPlan {
                    channel_id,
                    title: title.to_string(),
                    description: entry
                        .get("description")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    planned_date: Some(today + Duration::days(i64::from(day) - 1)),
                    content: entry.clone(),
                    status: STATUS_DRAFT.to_string(),
                })
                .await?;
            entries.push(saved);
        }

        info!(channel_id, days, saved = entries.len(), "Content plan generated");
        Ok(GeneratedPlan { plan, entries })
    }

    /// Reviews one post (by database id) with all its comments and reactions.
    #[instrument(skip(self))]
    pub async fn analyze_post_performance(&self, post_id: i64) -> Result<Value, AnalysisError> {
        let post = self
            .storage
            .posts()
            .get(post_id)
            .await?
            .ok_or(AnalysisError::PostNotFound(post_id))?;
        let comments = self.storage.comments().list_by_post(post.id, None, 0).await?;
        let reactions = self.storage.reactions().list_by_post(post.id).await?;

        let prompt = prompt::post_performance(&post_entry(&post, &comments, &reactions));
        let reply = self.complete(&prompt).await?;
        let analysis = parse_json_reply(&reply).ok_or(AnalysisError::Parse { raw: reply })?;

        self.storage
            .analyses()
            .insert(&NewAnalysis {
                channel_id: None,
                post_id: Some(post.id),
                analysis_type: AnalysisType::PostPerformance,
                content: analysis.clone(),
            })
            .await?;

        info!(post_id, comments = comments.len(), "Post analysis completed");
        Ok(analysis)
    }

    /// Drafts an audience survey from the latest channel analysis.
    #[instrument(skip(self))]
    pub async fn generate_survey(&self, channel_id: i64) -> Result<GeneratedSurvey, AnalysisError> {
        let analysis = self.latest_or_fresh_analysis(channel_id).await?;
        let prompt = prompt::survey(&analysis);
        let reply = self.complete(&prompt).await?;
        let survey = parse_json_reply(&reply).ok_or(AnalysisError::Parse { raw: reply })?;

        let title = survey
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| AnalysisError::InvalidResponse("survey has no title".to_string()))?;
        let questions = survey
            .get("questions")
            .filter(|q| q.is_array())
            .ok_or_else(|| {
                AnalysisError::InvalidResponse("survey has no questions array".to_string())
            })?;

        let record = self
            .storage
            .surveys()
            .insert(&NewSurvey {
                channel_id,
                title: title.to_string(),
                description: survey
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                questions: questions.clone(),
                status: STATUS_DRAFT.to_string(),
            })
            .await?;

        info!(channel_id, survey_id = record.id, "Survey generated");
        Ok(GeneratedSurvey { survey, record })
    }

    async fn latest_or_fresh_analysis(&self, channel_id: i64) -> Result<Value, AnalysisError> {
        match self
            .storage
            .analyses()
            .latest(channel_id, AnalysisType::ChannelContent)
            .await?
        {
            Some(analysis) => Ok(analysis.content_value()),
            None => {
                info!(channel_id, "No stored channel analysis, running a new one");
                self.analyze_channel_content(channel_id).await
            }
        }
    }

    async fn complete(&self, prompt: &AnalysisPrompt) -> Result<String, AnalysisError> {
        let options =
            CompletionOptions::new(prompt.temperature, prompt.max_tokens).with_json_mode(true);
        info!(kind = ?prompt.kind, model = %self.llm.model(), "Requesting analysis from LLM");
        self.llm
            .get_llm_response_with_messages(prompt.messages.clone(), options)
            .await
            .map_err(|e| AnalysisError::Llm(e.to_string()))
    }
}

/// `day_N` entries ordered by N; other keys are skipped with a warning.
fn plan_days(object: &Map<String, Value>) -> Vec<(u32, &Value)> {
    let mut days: Vec<(u32, &Value)> = object
        .iter()
        .filter_map(|(key, value)| match parse_day_key(key) {
            Some(day) => Some((day, value)),
            None => {
                warn!(key = %key, "Unexpected key in content plan skipped");
                None
            }
        })
        .collect();
    days.sort_by_key(|(day, _)| *day);
    days
}

fn parse_day_key(key: &str) -> Option<u32> {
    key.strip_prefix("day_")
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n > 0)
}
