//! Feed ordering for thought listings
//!
//! Pure functions over a snapshot of thoughts. Three orderings are
//! supported, selected by the `filter` query value:
//! - `new`: newest first, capped
//! - `top`: highest score first, capped
//! - `hot`: score ordering restricted to the trailing trending window
//!
//! With no (or an unrecognized) filter, the listing is newest first and
//! uncapped. Score sums approve, affection, and surprise; derision does
//! not count toward it. Ties fall back to id so repeated calls over the
//! same snapshot produce identical output.

use chrono::{DateTime, Duration, Utc};

use crate::models::Thought;

/// Feed ordering selected by the wire `filter` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    Recent,
    Trending,
    Top,
}

impl FeedMode {
    /// Parse the wire filter value. Absent or unrecognized filters select
    /// no mode, which renders the uncapped newest-first listing.
    pub fn parse(filter: Option<&str>) -> Option<FeedMode> {
        match filter {
            Some("new") => Some(FeedMode::Recent),
            Some("hot") => Some(FeedMode::Trending),
            Some("top") => Some(FeedMode::Top),
            _ => None,
        }
    }
}

/// Order (and for capped modes, truncate) a snapshot of thoughts.
///
/// `now` is passed in rather than read from the clock so that the same
/// snapshot always ranks the same way.
pub fn rank(
    mut thoughts: Vec<Thought>,
    mode: Option<FeedMode>,
    now: DateTime<Utc>,
    window: Duration,
    limit: usize,
) -> Vec<Thought> {
    match mode {
        None => {
            sort_newest_first(&mut thoughts);
        }
        Some(FeedMode::Recent) => {
            sort_newest_first(&mut thoughts);
            thoughts.truncate(limit);
        }
        Some(FeedMode::Top) => {
            sort_by_score(&mut thoughts);
            thoughts.truncate(limit);
        }
        Some(FeedMode::Trending) => {
            let cutoff = now - window;
            thoughts.retain(|thought| thought.created_at >= cutoff);
            sort_by_score(&mut thoughts);
            thoughts.truncate(limit);
        }
    }

    thoughts
}

fn sort_newest_first(thoughts: &mut [Thought]) {
    thoughts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
}

fn sort_by_score(thoughts: &mut [Thought]) {
    thoughts.sort_by(|a, b| b.votes.score().cmp(&a.votes.score()).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VoteCounts;
    use uuid::Uuid;

    const LIMIT: usize = 100;

    fn window() -> Duration {
        Duration::days(7)
    }

    fn make_thought(id: u128, age_days: i64, votes: VoteCounts, now: DateTime<Utc>) -> Thought {
        Thought {
            id: Uuid::from_u128(id),
            content: "test content".to_string(),
            username: "test-user".to_string(),
            twitter: None,
            votes,
            background_tag: "rgb(11 169 91)".to_string(),
            created_at: now - Duration::days(age_days),
        }
    }

    fn votes(approve: i64, affection: i64, surprise: i64, derision: i64) -> VoteCounts {
        VoteCounts {
            approve,
            affection,
            surprise,
            derision,
        }
    }

    #[test]
    fn recent_orders_newest_first() {
        let now = Utc::now();
        let thoughts = vec![
            make_thought(1, 5, VoteCounts::default(), now),
            make_thought(2, 1, VoteCounts::default(), now),
            make_thought(3, 3, VoteCounts::default(), now),
        ];

        let ranked = rank(thoughts, Some(FeedMode::Recent), now, window(), LIMIT);

        let ids: Vec<u128> = ranked.iter().map(|t| t.id.as_u128()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn top_orders_by_score_and_ignores_derision() {
        let now = Utc::now();
        let thoughts = vec![
            make_thought(1, 1, votes(1, 0, 0, 50), now),
            make_thought(2, 1, votes(2, 1, 0, 0), now),
        ];

        let ranked = rank(thoughts, Some(FeedMode::Top), now, window(), LIMIT);

        // 50 derision reactions do not outrank a score of 3
        assert_eq!(ranked[0].id.as_u128(), 2);
        assert_eq!(ranked[1].id.as_u128(), 1);
    }

    #[test]
    fn top_breaks_ties_by_id() {
        let now = Utc::now();
        let thoughts = vec![
            make_thought(9, 1, votes(1, 1, 1, 0), now),
            make_thought(4, 2, votes(3, 0, 0, 0), now),
        ];

        let ranked = rank(thoughts, Some(FeedMode::Top), now, window(), LIMIT);

        assert_eq!(ranked[0].id.as_u128(), 4);
        assert_eq!(ranked[1].id.as_u128(), 9);
    }

    #[test]
    fn trending_drops_thoughts_outside_the_window() {
        let now = Utc::now();
        // P1: 10 days old, score 5. P2: 1 day old, score 3.
        let thoughts = vec![
            make_thought(1, 10, votes(5, 0, 0, 0), now),
            make_thought(2, 1, votes(3, 0, 0, 0), now),
        ];

        let trending = rank(
            thoughts.clone(),
            Some(FeedMode::Trending),
            now,
            window(),
            LIMIT,
        );
        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].id.as_u128(), 2);

        let top = rank(thoughts, Some(FeedMode::Top), now, window(), LIMIT);
        let ids: Vec<u128> = top.iter().map(|t| t.id.as_u128()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn no_mode_returns_everything_newest_first() {
        let now = Utc::now();
        let thoughts: Vec<Thought> = (0..150i64)
            .map(|i| make_thought(i as u128, i, VoteCounts::default(), now))
            .collect();

        let ranked = rank(thoughts, None, now, window(), LIMIT);

        assert_eq!(ranked.len(), 150);
        assert_eq!(ranked[0].id.as_u128(), 0);
        assert_eq!(ranked[149].id.as_u128(), 149);
    }

    #[test]
    fn capped_modes_return_at_most_the_limit() {
        let now = Utc::now();
        let thoughts: Vec<Thought> = (0..150i64)
            .map(|i| make_thought(i as u128, 0, votes(i, 0, 0, 0), now))
            .collect();

        let ranked = rank(thoughts, Some(FeedMode::Top), now, window(), LIMIT);

        assert_eq!(ranked.len(), LIMIT);
        assert_eq!(ranked[0].votes.approve, 149);
    }

    #[test]
    fn score_orderings_are_stable_across_repeated_calls() {
        let now = Utc::now();
        let thoughts: Vec<Thought> = (0..20i64)
            .map(|i| make_thought(i as u128, i % 5, votes(i % 3, 1, 0, i), now))
            .collect();

        let first = rank(thoughts.clone(), Some(FeedMode::Trending), now, window(), LIMIT);
        let second = rank(thoughts, Some(FeedMode::Trending), now, window(), LIMIT);

        let first_ids: Vec<Uuid> = first.iter().map(|t| t.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|t| t.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn parse_maps_wire_filters() {
        assert_eq!(FeedMode::parse(Some("new")), Some(FeedMode::Recent));
        assert_eq!(FeedMode::parse(Some("hot")), Some(FeedMode::Trending));
        assert_eq!(FeedMode::parse(Some("top")), Some(FeedMode::Top));
        assert_eq!(FeedMode::parse(Some("spicy")), None);
        assert_eq!(FeedMode::parse(None), None);
    }
}
