//! Integration tests for [`collector::TelegramDataCollector`] against a scripted source.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use collector::{
    ChannelInfo, ChannelSource, CollectorError, CompositeSource, ReactionKind, SourceMessage,
    SourceReaction, SourceUser, TelegramDataCollector,
};
use storage::Storage;

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn message(tg_id: i64, text: &str) -> SourceMessage {
    let mut message = SourceMessage::new(tg_id, base_date() + Duration::hours(tg_id), text);
    message.views = tg_id * 100;
    message
}

fn info() -> ChannelInfo {
    ChannelInfo {
        tg_id: -1001234567890,
        username: Some("rustnews".to_string()),
        title: Some("Rust News".to_string()),
        description: Some("All things Rust".to_string()),
        member_count: Some(1500),
    }
}

/// Serves fixed data and counts calls. `replies` is `None` for a source without reply support.
struct FakeSource {
    info: ChannelInfo,
    posts: Vec<SourceMessage>,
    replies: Option<Vec<SourceMessage>>,
    info_calls: Mutex<usize>,
    reply_calls: Mutex<Vec<i64>>,
}

impl FakeSource {
    fn new(posts: Vec<SourceMessage>, replies: Option<Vec<SourceMessage>>) -> Arc<Self> {
        Arc::new(Self {
            info: info(),
            posts,
            replies,
            info_calls: Mutex::new(0),
            reply_calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ChannelSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn channel_info(&self, username: &str) -> Result<ChannelInfo, CollectorError> {
        *self.info_calls.lock().unwrap() += 1;
        if Some(username) == self.info.username.as_deref() {
            Ok(self.info.clone())
        } else {
            Err(CollectorError::ChannelNotFound(username.to_string()))
        }
    }

    async fn fetch_posts(
        &self,
        _username: &str,
        limit: usize,
        offset_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        let mut posts: Vec<SourceMessage> = self
            .posts
            .iter()
            .filter(|p| offset_date.map_or(true, |d| p.date < d))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn fetch_replies(
        &self,
        _username: &str,
        post_tg_id: i64,
        limit: usize,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        self.reply_calls.lock().unwrap().push(post_tg_id);
        match &self.replies {
            Some(replies) => Ok(replies.iter().take(limit).cloned().collect()),
            None => Err(CollectorError::Unsupported {
                source_name: "fake",
                operation: "post replies",
            }),
        }
    }
}

async fn storage() -> Storage {
    Storage::connect("sqlite::memory:")
        .await
        .expect("Failed to create storage")
}

/// **Test: Usernames are normalized before the source is asked; junk input is rejected.**
#[tokio::test]
async fn test_get_channel_info_normalizes_username() {
    let source = FakeSource::new(vec![], None);
    let collector = TelegramDataCollector::new(storage().await, source.clone());

    let info = collector
        .get_channel_info("https://t.me/rustnews")
        .await
        .expect("channel info");
    assert_eq!(info.tg_id, -1001234567890);

    let err = collector.get_channel_info("  @ ").await.unwrap_err();
    assert!(matches!(err, CollectorError::InvalidUsername(_)));
    assert_eq!(*source.info_calls.lock().unwrap(), 1);

    let err = collector.get_channel_info("@missing").await.unwrap_err();
    assert!(matches!(err, CollectorError::ChannelNotFound(_)));
}

/// **Test: resolve_channel registers once and then serves the stored row.**
#[tokio::test]
async fn test_resolve_channel_registers_once() {
    let source = FakeSource::new(vec![], None);
    let collector = TelegramDataCollector::new(storage().await, source.clone());

    let first = collector.resolve_channel("@rustnews").await.unwrap();
    let second = collector.resolve_channel("RustNews").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.member_count, Some(1500));
    assert_eq!(*source.info_calls.lock().unwrap(), 1);
    assert_eq!(collector.storage().channels().list().await.unwrap().len(), 1);
}

/// **Test: collect_posts stores text posts with counters and reactions, skipping empty ones.**
#[tokio::test]
async fn test_collect_posts_stores_text_posts() {
    let mut with_reactions = message(3, "Rust 1.80 released");
    with_reactions.reactions = vec![
        SourceReaction::new(ReactionKind::Emoji("👍".to_string()), 12),
        SourceReaction::new(ReactionKind::Paid, 2),
    ];
    let source = FakeSource::new(
        vec![message(1, "first"), message(2, "   "), with_reactions],
        None,
    );
    let collector = TelegramDataCollector::new(storage().await, source);
    let channel = collector.register_channel("rustnews").await.unwrap();

    let posts = collector.collect_posts(&channel, 10, None).await.unwrap();
    let ids: Vec<i64> = posts.iter().map(|p| p.tg_id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(posts[0].views, 300);

    let storage = collector.storage();
    assert_eq!(storage.posts().count_by_channel(channel.id).await.unwrap(), 2);
    let reactions = storage.reactions().list_by_post(posts[0].id).await.unwrap();
    let mut kinds: Vec<(String, i64)> = reactions
        .into_iter()
        .map(|r| (r.reaction_type, r.count))
        .collect();
    kinds.sort();
    assert_eq!(kinds, vec![("paid".to_string(), 2), ("👍".to_string(), 12)]);
}

/// **Test: Re-collecting does not duplicate posts, and offset_date limits to older posts.**
#[tokio::test]
async fn test_collect_posts_is_idempotent_with_offset() {
    let source = FakeSource::new(
        vec![message(1, "one"), message(2, "two"), message(3, "three")],
        None,
    );
    let collector = TelegramDataCollector::new(storage().await, source);
    let channel = collector.register_channel("rustnews").await.unwrap();

    collector.collect_posts(&channel, 10, None).await.unwrap();
    collector.collect_posts(&channel, 10, None).await.unwrap();
    assert_eq!(
        collector.storage().posts().count_by_channel(channel.id).await.unwrap(),
        3
    );

    let older = collector
        .collect_posts(&channel, 10, Some(base_date() + Duration::hours(3)))
        .await
        .unwrap();
    let ids: Vec<i64> = older.iter().map(|p| p.tg_id).collect();
    assert_eq!(ids, vec![2, 1]);
}

/// **Test: collect_channel gathers comments with authors for the newest posts.**
#[tokio::test]
async fn test_collect_channel_with_replies() {
    let mut reply = message(100, "Great news!");
    reply.author = Some(SourceUser {
        tg_id: 42,
        username: Some("ferris".to_string()),
        first_name: Some("Ferris".to_string()),
        last_name: None,
    });
    let source = FakeSource::new(
        vec![message(1, "one"), message(2, "two")],
        Some(vec![reply, message(101, "")]),
    );
    let collector = TelegramDataCollector::new(storage().await, source.clone());
    let channel = collector.register_channel("rustnews").await.unwrap();

    let summary = collector.collect_channel(&channel, 10).await.unwrap();
    assert_eq!(summary.posts, 2);
    assert_eq!(summary.comments, 2, "one text reply per post");
    assert_eq!(*source.reply_calls.lock().unwrap(), vec![2, 1]);

    let storage = collector.storage();
    let post = storage.posts().get_by_tg_id(channel.id, 2).await.unwrap().unwrap();
    let comments = storage.comments().list_by_post(post.id, None, 0).await.unwrap();
    assert_eq!(comments.len(), 1);

    let user = storage.users().get_by_tg_id(42).await.unwrap().unwrap();
    assert_eq!(comments[0].user_id, Some(user.id));
}

/// **Test: A source without reply support still yields posts.**
#[tokio::test]
async fn test_collect_channel_without_reply_support() {
    let source = FakeSource::new(vec![message(1, "one"), message(2, "two")], None);
    let collector = TelegramDataCollector::new(storage().await, source.clone());
    let channel = collector.register_channel("rustnews").await.unwrap();

    let summary = collector.collect_channel(&channel, 10).await.unwrap();
    assert_eq!(summary.posts, 2);
    assert_eq!(summary.comments, 0);
    assert_eq!(source.reply_calls.lock().unwrap().len(), 1, "stops after the first refusal");
}

/// **Test: Live updates are stored against known channels and posts only.**
#[tokio::test]
async fn test_ingest_live_updates() {
    let collector = TelegramDataCollector::new(storage().await, FakeSource::new(vec![], None));
    let channel_info = info();

    let post = collector
        .ingest_channel_post(&channel_info, &message(7, "live post"))
        .await
        .unwrap()
        .expect("text post is stored");
    assert!(collector
        .ingest_channel_post(&channel_info, &message(8, ""))
        .await
        .unwrap()
        .is_none());

    let comment = collector
        .ingest_comment(channel_info.tg_id, 7, &message(500, "nice"))
        .await
        .unwrap()
        .expect("comment on a known post");
    assert_eq!(comment.post_id, post.id);
    assert!(collector
        .ingest_comment(channel_info.tg_id, 999, &message(501, "lost"))
        .await
        .unwrap()
        .is_none());

    let reactions = collector
        .ingest_post_reactions(
            channel_info.tg_id,
            7,
            &[SourceReaction::new(ReactionKind::Emoji("🔥".to_string()), 4)],
        )
        .await
        .unwrap()
        .expect("reactions on a known post");
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].count, 4);

    let replaced = collector
        .ingest_post_reactions(channel_info.tg_id, 7, &[])
        .await
        .unwrap()
        .unwrap();
    assert!(replaced.is_empty());

    assert!(collector
        .ingest_post_reactions(1, 7, &[])
        .await
        .unwrap()
        .is_none());
}

/// **Test: CompositeSource routes metadata and history to different sources.**
#[tokio::test]
async fn test_composite_source_routing() {
    struct MetadataOnly;

    #[async_trait]
    impl ChannelSource for MetadataOnly {
        fn name(&self) -> &'static str {
            "metadata_only"
        }

        async fn channel_info(&self, _username: &str) -> Result<ChannelInfo, CollectorError> {
            Ok(info())
        }
    }

    let history = FakeSource::new(vec![message(1, "one")], None);
    let composite = CompositeSource::new(Arc::new(MetadataOnly), history.clone());

    assert_eq!(composite.channel_info("rustnews").await.unwrap().tg_id, -1001234567890);
    assert_eq!(*history.info_calls.lock().unwrap(), 0);
    assert_eq!(composite.fetch_posts("rustnews", 5, None).await.unwrap().len(), 1);

    let err = MetadataOnly.fetch_posts("rustnews", 5, None).await.unwrap_err();
    assert!(err.is_unsupported());
}
