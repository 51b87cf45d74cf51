/**
 * Emoji Reaction Aggregates
 *
 * This module defines the ReactionAggregate struct, the per-(ticket, emoji)
 * counted set of voters. One aggregate exists per emoji per ticket; each
 * voter appears at most once. The aggregate is the unit pushed to
 * subscribers over the WebSocket channel, so it serializes with camelCase
 * field names and its voter set serializes as a JSON array.
 *
 * # Invariants
 *
 * - `count` always equals the number of voters. The only mutators are
 *   `add_voter` and `remove_voter`, which recompute it; callers never
 *   touch `count` or `voters` directly.
 * - An aggregate with zero voters is never kept: the store deletes it as
 *   soon as the last voter is removed.
 * - `created_by` and `created_at` are fixed at creation.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A counted set of voters for one emoji on one ticket
///
/// Identity on the wire is the generated `id`; removal is addressed by it.
/// `resource_id` is the ticket the aggregate belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionAggregate {
    pub id: i64,
    pub resource_id: i64,
    pub emoji: String,
    pub count: usize,
    /// Voter who first created this aggregate
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub voters: BTreeSet<String>,
}

impl ReactionAggregate {
    /// Create an aggregate from its first vote
    ///
    /// The creating voter is recorded as `created_by` and becomes the sole
    /// member, so the new aggregate starts at `count == 1`.
    pub fn new(id: i64, resource_id: i64, emoji: impl Into<String>, voter: impl Into<String>) -> Self {
        let voter = voter.into();
        let mut voters = BTreeSet::new();
        voters.insert(voter.clone());
        Self {
            id,
            resource_id,
            emoji: emoji.into(),
            count: 1,
            created_by: voter,
            created_at: Utc::now(),
            voters,
        }
    }

    /// Whether `voter` is a member of this aggregate
    pub fn has_voter(&self, voter: &str) -> bool {
        self.voters.contains(voter)
    }

    /// Add a voter, keeping `count` in sync
    ///
    /// Returns `true` if the voter was newly added, `false` if they were
    /// already a member (adding twice is a no-op, not an error).
    pub fn add_voter(&mut self, voter: &str) -> bool {
        let added = self.voters.insert(voter.to_string());
        self.count = self.voters.len();
        added
    }

    /// Remove a voter, keeping `count` in sync
    ///
    /// Returns `true` if the voter was a member and has been removed.
    /// The caller is responsible for deleting the aggregate when the last
    /// voter leaves.
    pub fn remove_voter(&mut self, voter: &str) -> bool {
        let removed = self.voters.remove(voter);
        self.count = self.voters.len();
        removed
    }
}
