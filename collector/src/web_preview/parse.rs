//! HTML parsing of preview pages. Kept synchronous: `scraper::Html` is not `Send`.

use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::error::CollectorError;
use crate::types::{ReactionKind, SourceMessage, SourceReaction};

pub(crate) struct PageParser {
    message: Selector,
    text: Selector,
    views: Selector,
    date: Selector,
    reaction: Selector,
    custom_emoji: Selector,
    emoji: Selector,
}

fn selector(css: &str) -> Result<Selector, CollectorError> {
    Selector::parse(css).map_err(|e| CollectorError::Parse(format!("selector {}: {}", css, e)))
}

impl PageParser {
    pub(crate) fn new() -> Result<Self, CollectorError> {
        Ok(Self {
            message: selector(".tgme_widget_message[data-post]:not(.service_message)")?,
            text: selector(".tgme_widget_message_text.js-message_text")?,
            views: selector(".tgme_widget_message_views")?,
            date: selector(".tgme_widget_message_date time[datetime]")?,
            reaction: selector(".tgme_reaction")?,
            custom_emoji: selector("tg-emoji[emoji-id]")?,
            emoji: selector("i.emoji b")?,
        })
    }

    /// Messages of one page in page order (oldest first). Entries without id or date are skipped.
    pub(crate) fn parse_messages(&self, html: &str) -> Result<Vec<SourceMessage>, CollectorError> {
        let document = Html::parse_document(html);
        let mut messages = Vec::new();

        for element in document.select(&self.message) {
            let Some(tg_id) = element
                .value()
                .attr("data-post")
                .and_then(|post| post.rsplit('/').next())
                .and_then(|id| id.parse::<i64>().ok())
            else {
                continue;
            };

            let Some(date) = element
                .select(&self.date)
                .next()
                .and_then(|time| time.value().attr("datetime"))
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|d| d.with_timezone(&Utc))
            else {
                debug!(tg_id, "Preview message without date skipped");
                continue;
            };

            let text = element
                .select(&self.text)
                .next()
                .map(text_with_breaks)
                .unwrap_or_default();
            let views = element
                .select(&self.views)
                .next()
                .map(|v| parse_compact_count(&v.text().collect::<String>()))
                .unwrap_or(0);
            let reactions = element
                .select(&self.reaction)
                .filter_map(|r| self.parse_reaction(r))
                .collect();

            messages.push(SourceMessage {
                tg_id,
                date,
                text,
                views,
                forwards: 0,
                reactions,
                author: None,
            });
        }

        Ok(messages)
    }

    fn parse_reaction(&self, element: ElementRef<'_>) -> Option<SourceReaction> {
        let kind = if let Some(id) = element
            .select(&self.custom_emoji)
            .next()
            .and_then(|e| e.value().attr("emoji-id"))
        {
            ReactionKind::CustomEmoji(id.to_string())
        } else if element.value().classes().any(|c| c == "tgme_reaction_paid") {
            ReactionKind::Paid
        } else {
            let emoji: String = element.select(&self.emoji).next()?.text().collect();
            ReactionKind::Emoji(emoji.trim().to_string())
        };

        // The count is the span's own text, after the emoji markup.
        let own_text: String = element
            .children()
            .filter_map(|child| child.value().as_text().map(|t| String::from(&**t)))
            .collect();
        Some(SourceReaction::new(kind, parse_compact_count(&own_text)))
    }
}

/// Text content with `<br>` turned into newlines.
fn text_with_breaks(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) if e.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Parses counters shown as `845`, `1.2K`, `3M`, `1,5K`. Unreadable input is 0.
pub fn parse_compact_count(raw: &str) -> i64 {
    let raw = raw.trim().replace(',', ".");
    let (number, multiplier) = match raw.chars().last() {
        Some('K' | 'k') => (&raw[..raw.len() - 1], 1_000.0),
        Some('M' | 'm') => (&raw[..raw.len() - 1], 1_000_000.0),
        Some('B' | 'b') => (&raw[..raw.len() - 1], 1_000_000_000.0),
        _ => (raw.as_str(), 1.0),
    };
    number
        .trim()
        .parse::<f64>()
        .map(|n| (n * multiplier).round() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
<section class="tgme_channel_history js-message_history">
  <div class="tgme_widget_message_wrap js-widget_message_wrap">
    <div class="tgme_widget_message text_not_supported_wrap js-widget_message" data-post="rustnews/41">
      <div class="tgme_widget_message_bubble">
        <div class="tgme_widget_message_text js-message_text" dir="auto">First line<br/>Second <b>bold</b> line</div>
        <div class="tgme_widget_message_reactions js-message_reactions">
          <span class="tgme_reaction"><i class="emoji" style="background-image:url('x')"><b>👍</b></i>1.2K</span>
          <span class="tgme_reaction"><tg-emoji emoji-id="5368324170671202286"><i class="emoji"><b>🔥</b></i></tg-emoji>37</span>
          <span class="tgme_reaction tgme_reaction_paid"><i class="emoji"><b>⭐</b></i>5</span>
        </div>
        <div class="tgme_widget_message_footer compact js-message_footer">
          <div class="tgme_widget_message_info short js-message_info">
            <span class="tgme_widget_message_views">12.5K</span>
            <span class="tgme_widget_message_meta"><a class="tgme_widget_message_date" href="https://t.me/rustnews/41"><time datetime="2024-05-01T10:00:00+00:00" class="time">10:00</time></a></span>
          </div>
        </div>
      </div>
    </div>
  </div>
  <div class="tgme_widget_message_wrap js-widget_message_wrap">
    <div class="tgme_widget_message service_message js-widget_message" data-post="rustnews/42">
      <div class="tgme_widget_message_text js-message_text">Channel photo updated</div>
    </div>
  </div>
  <div class="tgme_widget_message_wrap js-widget_message_wrap">
    <div class="tgme_widget_message js-widget_message" data-post="rustnews/43">
      <div class="tgme_widget_message_reply"><div class="tgme_widget_message_text js-message_reply_text">quoted</div></div>
      <div class="tgme_widget_message_text js-message_text" dir="auto">Reply body</div>
      <span class="tgme_widget_message_views">845</span>
      <a class="tgme_widget_message_date" href="https://t.me/rustnews/43"><time datetime="2024-05-02T11:30:00+00:00">11:30</time></a>
    </div>
  </div>
  <div class="tgme_widget_message_wrap js-widget_message_wrap">
    <div class="tgme_widget_message js-widget_message" data-post="rustnews/44">
      <div class="tgme_widget_message_photo_wrap"></div>
      <a class="tgme_widget_message_date" href="https://t.me/rustnews/44"><time datetime="2024-05-03T09:00:00+00:00">09:00</time></a>
    </div>
  </div>
</section>
</body></html>
"#;

    #[test]
    fn test_parse_messages() {
        let parser = PageParser::new().unwrap();
        let messages = parser.parse_messages(PAGE).unwrap();

        let ids: Vec<i64> = messages.iter().map(|m| m.tg_id).collect();
        assert_eq!(ids, vec![41, 43, 44], "service messages are skipped");

        let first = &messages[0];
        assert_eq!(first.text, "First line\nSecond bold line");
        assert_eq!(first.views, 12_500);
        assert_eq!(first.date.to_rfc3339(), "2024-05-01T10:00:00+00:00");
        assert_eq!(
            first.reactions,
            vec![
                SourceReaction::new(ReactionKind::Emoji("👍".to_string()), 1200),
                SourceReaction::new(
                    ReactionKind::CustomEmoji("5368324170671202286".to_string()),
                    37
                ),
                SourceReaction::new(ReactionKind::Paid, 5),
            ]
        );

        assert_eq!(messages[1].text, "Reply body", "quoted reply text is not the body");
        assert_eq!(messages[1].views, 845);
        assert!(messages[2].text.is_empty());
    }

    #[test]
    fn test_parse_compact_count() {
        assert_eq!(parse_compact_count("845"), 845);
        assert_eq!(parse_compact_count("1.2K"), 1200);
        assert_eq!(parse_compact_count(" 3M "), 3_000_000);
        assert_eq!(parse_compact_count("1,5K"), 1500);
        assert_eq!(parse_compact_count(""), 0);
        assert_eq!(parse_compact_count("views"), 0);
    }
}
