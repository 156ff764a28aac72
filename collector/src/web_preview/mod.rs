//! Channel history from the public web preview (`<web>/s/<channel>`).
//!
//! The preview shows about twenty posts per page, oldest first; older pages are
//! requested with `?before=<post id>`. Replies are not available there.

mod parse;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::CollectorError;
use crate::source::ChannelSource;
use crate::types::SourceMessage;

pub use parse::parse_compact_count;
use parse::PageParser;

/// Upper bound on pages fetched per request, whatever the limit.
const MAX_PAGES: usize = 50;

pub struct WebPreviewSource {
    client: reqwest::Client,
    base_url: String,
    parser: PageParser,
}

impl WebPreviewSource {
    /// `base_url` is the preview host, normally `https://t.me`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CollectorError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tg-analytics/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            parser: PageParser::new()?,
        })
    }

    async fn fetch_page(
        &self,
        username: &str,
        before: Option<i64>,
    ) -> Result<String, CollectorError> {
        let url = format!("{}/s/{}", self.base_url, username);
        let mut request = self.client.get(&url);
        if let Some(before) = before {
            request = request.query(&[("before", before)]);
        }
        debug!(url = %url, before = ?before, "Fetching channel preview page");

        let response = request.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CollectorError::ChannelNotFound(username.to_string()));
        }
        Ok(response.error_for_status()?.text().await?)
    }
}

#[async_trait]
impl ChannelSource for WebPreviewSource {
    fn name(&self) -> &'static str {
        "web_preview"
    }

    async fn fetch_posts(
        &self,
        username: &str,
        limit: usize,
        offset_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        let mut collected: Vec<SourceMessage> = Vec::new();
        let mut before: Option<i64> = None;

        for _ in 0..MAX_PAGES {
            if collected.len() >= limit {
                break;
            }
            let html = self.fetch_page(username, before).await?;
            let page = self.parser.parse_messages(&html)?;
            let Some(oldest) = page.iter().map(|m| m.tg_id).min() else {
                break;
            };

            for message in page.into_iter().rev() {
                if collected.len() >= limit {
                    break;
                }
                if offset_date.map_or(true, |date| message.date < date) {
                    collected.push(message);
                }
            }

            // Post ids start at 1; the preview repeats the last page past the beginning.
            if oldest <= 1 || before == Some(oldest) {
                break;
            }
            before = Some(oldest);
        }

        info!(
            username = %username,
            count = collected.len(),
            "Fetched posts from channel preview"
        );
        Ok(collected)
    }
}
