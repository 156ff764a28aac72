//! JSON payloads describing posts, as embedded into prompts.

use serde_json::{json, Value};
use storage::{Comment, Post, Reaction};

/// Single number used to rank posts: views + forwards·5 + comments·3 + reactions·2.
pub fn engagement_score(post: &Post, comments: usize, reactions: &[Reaction]) -> i64 {
    let reaction_total: i64 = reactions.iter().map(|r| r.count).sum();
    post.views + post.forwards * 5 + comments as i64 * 3 + reaction_total * 2
}

fn reactions_json(reactions: &[Reaction]) -> Vec<Value> {
    reactions
        .iter()
        .map(|r| json!({"type": r.reaction_type, "count": r.count}))
        .collect()
}

/// Entry for the channel-wide analysis; only the first `comment_limit` comments are included.
pub(crate) fn channel_post_entry(
    post: &Post,
    comments: &[Comment],
    reactions: &[Reaction],
    comment_limit: usize,
) -> Value {
    let sample: Vec<Value> = comments
        .iter()
        .take(comment_limit)
        .map(|c| json!({"id": c.tg_id, "content": c.content, "user_id": c.user_id}))
        .collect();

    json!({
        "id": post.tg_id,
        "content": post.content,
        "posted_at": post.posted_at.to_rfc3339(),
        "views": post.views,
        "forwards": post.forwards,
        "comments_count": comments.len(),
        "comments": sample,
        "reactions": reactions_json(reactions),
        "engagement": engagement_score(post, comments.len(), reactions),
    })
}

/// Full description of one post for the performance review.
pub(crate) fn post_entry(post: &Post, comments: &[Comment], reactions: &[Reaction]) -> Value {
    let comments_json: Vec<Value> = comments
        .iter()
        .map(|c| {
            json!({
                "id": c.tg_id,
                "content": c.content,
                "user_id": c.user_id,
                "commented_at": c.commented_at.to_rfc3339(),
            })
        })
        .collect();

    json!({
        "id": post.tg_id,
        "content": post.content,
        "posted_at": post.posted_at.to_rfc3339(),
        "views": post.views,
        "forwards": post.forwards,
        "comments": comments_json,
        "reactions": reactions_json(reactions),
        "engagement": engagement_score(post, comments.len(), reactions),
    })
}
