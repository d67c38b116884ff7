use crate::models::{Thought, VoteCounts, VoteDelta};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Raw thoughts row. Counters live in flat columns; `From` folds them
/// into the nested [`VoteCounts`] shape the rest of the service uses.
#[derive(sqlx::FromRow)]
struct ThoughtRow {
    id: Uuid,
    content: String,
    username: String,
    twitter: Option<String>,
    votes_approve: i64,
    votes_affection: i64,
    votes_surprise: i64,
    votes_derision: i64,
    background_tag: String,
    created_at: DateTime<Utc>,
}

impl From<ThoughtRow> for Thought {
    fn from(row: ThoughtRow) -> Self {
        Thought {
            id: row.id,
            content: row.content,
            username: row.username,
            twitter: row.twitter,
            votes: VoteCounts {
                approve: row.votes_approve,
                affection: row.votes_affection,
                surprise: row.votes_surprise,
                derision: row.votes_derision,
            },
            background_tag: row.background_tag,
            created_at: row.created_at,
        }
    }
}

/// Insert a new thought with all counters at zero.
/// The database assigns `created_at`; the id is bound by the caller side.
pub async fn insert_thought(
    pool: &PgPool,
    content: &str,
    username: &str,
    twitter: Option<&str>,
    background_tag: &str,
) -> Result<Thought, sqlx::Error> {
    let row = sqlx::query_as::<_, ThoughtRow>(
        r#"
        INSERT INTO thoughts (id, content, username, twitter, background_tag)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, content, username, twitter,
                  votes_approve, votes_affection, votes_surprise, votes_derision,
                  background_tag, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(content)
    .bind(username)
    .bind(twitter)
    .bind(background_tag)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Fetch all thoughts, optionally restricted to `created_at >= since`.
/// Rows come back in storage order; ordering is the ranking engine's job.
pub async fn list_thoughts(
    pool: &PgPool,
    since: Option<DateTime<Utc>>,
) -> Result<Vec<Thought>, sqlx::Error> {
    let rows = match since {
        Some(cutoff) => {
            sqlx::query_as::<_, ThoughtRow>(
                r#"
                SELECT id, content, username, twitter,
                       votes_approve, votes_affection, votes_surprise, votes_derision,
                       background_tag, created_at
                FROM thoughts
                WHERE created_at >= $1
                "#,
            )
            .bind(cutoff)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ThoughtRow>(
                r#"
                SELECT id, content, username, twitter,
                       votes_approve, votes_affection, votes_surprise, votes_derision,
                       background_tag, created_at
                FROM thoughts
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.into_iter().map(Thought::from).collect())
}

/// Find a thought by ID
pub async fn find_thought_by_id(
    pool: &PgPool,
    thought_id: Uuid,
) -> Result<Option<Thought>, sqlx::Error> {
    let row = sqlx::query_as::<_, ThoughtRow>(
        r#"
        SELECT id, content, username, twitter,
               votes_approve, votes_affection, votes_surprise, votes_derision,
               background_tag, created_at
        FROM thoughts
        WHERE id = $1
        "#,
    )
    .bind(thought_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Thought::from))
}

/// Apply signed counter deltas to a thought in one atomic statement.
///
/// Each counter is clamped with `GREATEST(.. , 0)` server-side, which is
/// the backstop against inconsistent caller vote state. Column names are
/// static; only the deltas travel as bound parameters. Returns `None`
/// when the id does not exist.
pub async fn apply_vote_delta(
    pool: &PgPool,
    thought_id: Uuid,
    delta: &VoteDelta,
) -> Result<Option<Thought>, sqlx::Error> {
    let row = sqlx::query_as::<_, ThoughtRow>(
        r#"
        UPDATE thoughts
        SET votes_approve   = GREATEST(votes_approve + $2, 0),
            votes_affection = GREATEST(votes_affection + $3, 0),
            votes_surprise  = GREATEST(votes_surprise + $4, 0),
            votes_derision  = GREATEST(votes_derision + $5, 0)
        WHERE id = $1
        RETURNING id, content, username, twitter,
                  votes_approve, votes_affection, votes_surprise, votes_derision,
                  background_tag, created_at
        "#,
    )
    .bind(thought_id)
    .bind(delta.approve)
    .bind(delta.affection)
    .bind(delta.surprise)
    .bind(delta.derision)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Thought::from))
}
