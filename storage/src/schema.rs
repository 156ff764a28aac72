//! Table and index definitions, applied on every start.

use sqlx::SqlitePool;
use tracing::info;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tg_id INTEGER NOT NULL UNIQUE,
        username TEXT,
        first_name TEXT,
        last_name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS channels (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tg_id INTEGER NOT NULL UNIQUE,
        username TEXT,
        title TEXT,
        description TEXT,
        member_count INTEGER,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tg_id INTEGER NOT NULL,
        channel_id INTEGER NOT NULL REFERENCES channels(id) ON DELETE CASCADE,
        content TEXT NOT NULL,
        posted_at TEXT NOT NULL,
        views INTEGER NOT NULL DEFAULT 0,
        forwards INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        UNIQUE (channel_id, tg_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tg_id INTEGER NOT NULL,
        post_id INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
        user_id INTEGER REFERENCES users(id) ON DELETE SET NULL,
        content TEXT NOT NULL,
        commented_at TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        UNIQUE (post_id, tg_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        post_id INTEGER REFERENCES posts(id) ON DELETE CASCADE,
        comment_id INTEGER REFERENCES comments(id) ON DELETE CASCADE,
        reaction_type TEXT NOT NULL,
        count INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        CHECK ((post_id IS NULL) <> (comment_id IS NULL))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS analyses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        channel_id INTEGER REFERENCES channels(id) ON DELETE CASCADE,
        post_id INTEGER REFERENCES posts(id) ON DELETE CASCADE,
        analysis_type TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS content_plans (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        channel_id INTEGER NOT NULL REFERENCES channels(id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        description TEXT,
        planned_date TEXT,
        content TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'draft',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS surveys (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        channel_id INTEGER NOT NULL REFERENCES channels(id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        description TEXT,
        questions TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'draft',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_channels_username ON channels(username)",
    "CREATE INDEX IF NOT EXISTS idx_posts_channel_posted ON posts(channel_id, posted_at)",
    "CREATE INDEX IF NOT EXISTS idx_comments_post_commented ON comments(post_id, commented_at)",
    "CREATE INDEX IF NOT EXISTS idx_reactions_post_id ON reactions(post_id)",
    "CREATE INDEX IF NOT EXISTS idx_reactions_comment_id ON reactions(comment_id)",
    "CREATE INDEX IF NOT EXISTS idx_analyses_channel_type ON analyses(channel_id, analysis_type, created_at)",
    "CREATE INDEX IF NOT EXISTS idx_analyses_post_id ON analyses(post_id)",
    "CREATE INDEX IF NOT EXISTS idx_content_plans_channel_id ON content_plans(channel_id)",
    "CREATE INDEX IF NOT EXISTS idx_surveys_channel_id ON surveys(channel_id)",
];

/// Creates all tables and indexes that do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Creating database tables if not exist");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database tables created successfully");
    Ok(())
}
