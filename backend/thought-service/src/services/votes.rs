//! Vote transition reconciliation
//!
//! The service has no voter identity model; the client tracks which
//! reaction it previously cast on a thought and sends both sides of the
//! transition. This module turns that pair into signed counter deltas.
//! The repository clamps counters at zero when applying them, which
//! covers clients whose local vote state has drifted.

use crate::models::{Reaction, VoteDelta};

/// Compute the counter deltas for a vote transition.
///
/// - first vote (`None -> K`): +1 on K
/// - retraction (`K -> None`): -1 on K
/// - switch (`K -> L`): -1 on K and +1 on L in one delta
/// - identical sides: zero delta, so replays are idempotent
pub fn reconcile(previous: Option<Reaction>, next: Option<Reaction>) -> VoteDelta {
    let mut delta = VoteDelta::default();

    if previous == next {
        return delta;
    }

    if let Some(reaction) = previous {
        *delta.counter_mut(reaction) -= 1;
    }
    if let Some(reaction) = next {
        *delta.counter_mut(reaction) += 1;
    }

    delta
}
