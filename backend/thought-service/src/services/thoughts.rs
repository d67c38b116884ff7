/// Thought service - handles creation, feed assembly, votes, and feedback
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::config::FeedConfig;
use crate::db::{feedback_repo, thought_repo};
use crate::error::{AppError, Result};
use crate::models::{Reaction, Thought};
use crate::services::ranking::{self, FeedMode};
use crate::services::votes;

/// Background palette applied to new thoughts. Purely presentational;
/// carries no meaning beyond card styling.
const CARD_PALETTE: [&str; 6] = [
    "rgb(11 169 91)",
    "rgb(35 31 32)",
    "rgb(237 32 61)",
    "rgb(243 139 163)",
    "rgb(249 244 218)",
    "rgb(18 181 229)",
];

/// Uniform random draw from the palette.
fn pick_background_tag() -> &'static str {
    CARD_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CARD_PALETTE[0])
}

pub struct ThoughtService {
    pool: PgPool,
    feed: FeedConfig,
}

impl ThoughtService {
    pub fn new(pool: PgPool, feed: FeedConfig) -> Self {
        Self { pool, feed }
    }

    /// Create a new thought. The background tag is drawn uniformly at
    /// random from the fixed palette; id and timestamp are assigned by
    /// the persistence layer.
    pub async fn create_thought(
        &self,
        content: &str,
        username: &str,
        twitter: Option<&str>,
    ) -> Result<Thought> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "content must not be empty".to_string(),
            ));
        }
        if username.trim().is_empty() {
            return Err(AppError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }

        let background_tag = pick_background_tag();

        let thought =
            thought_repo::insert_thought(&self.pool, content, username, twitter, background_tag)
                .await?;

        debug!(thought_id = %thought.id, "Created thought");
        Ok(thought)
    }

    /// Assemble a feed under the requested ordering.
    ///
    /// The trending cutoff is pushed down to the listing query so old
    /// rows never leave the database; the ranking engine then orders and
    /// caps the snapshot.
    pub async fn get_feed(&self, mode: Option<FeedMode>) -> Result<Vec<Thought>> {
        let now = Utc::now();
        let window = Duration::days(self.feed.trending_window_days);

        let since = match mode {
            Some(FeedMode::Trending) => Some(now - window),
            _ => None,
        };

        let thoughts = thought_repo::list_thoughts(&self.pool, since).await?;
        Ok(ranking::rank(thoughts, mode, now, window, self.feed.max_items))
    }

    /// Apply a vote transition and return the refreshed thought.
    pub async fn vote(
        &self,
        thought_id: Uuid,
        previous: Option<Reaction>,
        next: Option<Reaction>,
    ) -> Result<Thought> {
        let delta = votes::reconcile(previous, next);

        // A no-op transition still has to 404 on unknown ids, but there
        // is nothing to write.
        let refreshed = if delta.is_zero() {
            thought_repo::find_thought_by_id(&self.pool, thought_id).await?
        } else {
            thought_repo::apply_vote_delta(&self.pool, thought_id, &delta).await?
        };

        refreshed.ok_or_else(|| AppError::NotFound(format!("thought {} does not exist", thought_id)))
    }

    /// Record a feedback message.
    pub async fn submit_feedback(&self, message: &str, email: Option<&str>) -> Result<()> {
        if message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "feedback must not be empty".to_string(),
            ));
        }

        feedback_repo::insert_feedback(&self.pool, message, email).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_tags_come_from_the_palette() {
        for _ in 0..50 {
            let tag = pick_background_tag();
            assert!(CARD_PALETTE.contains(&tag));
        }
    }
}
