use sqlx::PgPool;
use tracing::info;

/// Ensure the thought-service tables exist.
///
/// Both tables must be present before any request is served. We lazily
/// create them at service startup to unblock environments where no
/// migration has been applied yet (e.g. fresh developer machines or CI
/// spins). Every statement is idempotent, so this is safe on every boot.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring thought-service tables exist");

    sqlx::query(THOUGHTS_TABLE).execute(pool).await?;
    sqlx::query(THOUGHTS_CREATED_AT_INDEX).execute(pool).await?;
    sqlx::query(FEEDBACK_TABLE).execute(pool).await?;

    Ok(())
}

const THOUGHTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS thoughts (
    id UUID PRIMARY KEY,
    content TEXT NOT NULL,
    username TEXT NOT NULL,
    twitter TEXT,
    votes_approve BIGINT NOT NULL DEFAULT 0,
    votes_affection BIGINT NOT NULL DEFAULT 0,
    votes_surprise BIGINT NOT NULL DEFAULT 0,
    votes_derision BIGINT NOT NULL DEFAULT 0,
    background_tag TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const THOUGHTS_CREATED_AT_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_thoughts_created_at ON thoughts (created_at DESC)
"#;

const FEEDBACK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS feedback (
    id UUID PRIMARY KEY,
    message TEXT NOT NULL,
    email TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
