/**
 * Reaction Store
 *
 * The process-wide owner of all reaction aggregates. Aggregates are keyed
 * by a generated integer id; identity for merging is (ticket, emoji), so
 * adding a vote for an emoji that already has an aggregate on that ticket
 * merges into it instead of creating a second one.
 *
 * # Mutation Semantics
 *
 * - `add_voter` creates the aggregate on first vote and is idempotent per
 *   voter afterwards.
 * - `remove_voter` is addressed by aggregate id (clients always hold it:
 *   both the REST response to a vote and every push snapshot carry `id`).
 *   Removing an unknown aggregate or a non-member voter is a no-op.
 *   Removing the last voter deletes the aggregate; a zero-count aggregate
 *   never survives a call.
 *
 * # Change Notification
 *
 * The store accepts one registered change listener, invoked synchronously
 * after each committed mutation with the affected ticket id. The listener
 * runs after the store's lock is released, so it may call back into
 * `list()`. Removal of an unknown aggregate id fires nothing; removal of
 * a non-member voter still fires, since the snapshot a subscriber holds
 * may predate the aggregate it addressed.
 *
 * # Concurrency
 *
 * All mutations serialize behind a single mutex, and each mutation plus
 * its notification runs under a gate held across both, so listeners
 * observe commits in order and snapshots queue to any one subscriber in
 * mutation order. Critical sections are short and never cross an
 * `.await`. `list()` takes only the table lock and may be called from
 * inside the listener.
 */
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::shared::reaction::ReactionAggregate;

/// Callback invoked with the ticket id after each committed mutation
pub type ChangeListener = Arc<dyn Fn(i64) + Send + Sync>;

/// Outcome of a removal while the table lock is held
enum Removal {
    /// No aggregate with that id on that ticket
    Unknown,
    /// Voter was not a member; aggregate returned unchanged
    Untouched(ReactionAggregate),
    /// Voter removed; aggregate still has members
    Updated(ReactionAggregate),
    /// Last voter removed; aggregate deleted
    Emptied,
}

#[derive(Default)]
struct ReactionTable {
    aggregates: HashMap<i64, ReactionAggregate>,
    next_id: i64,
}

/// Process-wide reaction aggregate store
///
/// Constructed once at startup and shared via `Arc`. All reaction
/// mutations in the application funnel through this type.
pub struct ReactionStore {
    table: Mutex<ReactionTable>,
    listener: RwLock<Option<ChangeListener>>,
    /// Held across commit plus notification; keeps snapshots in commit order
    gate: Mutex<()>,
}

impl ReactionStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ReactionTable {
                aggregates: HashMap::new(),
                next_id: 1,
            }),
            listener: RwLock::new(None),
            gate: Mutex::new(()),
        }
    }

    /// Register the post-mutation change listener
    ///
    /// Called once during server initialization to wire the broadcast
    /// coordinator in. Registering replaces any previous listener.
    pub fn set_change_listener(&self, listener: ChangeListener) {
        *self.listener.write().unwrap() = Some(listener);
    }

    /// Record a vote for `emoji` on `resource_id`
    ///
    /// Creates the aggregate if this is the first vote for that emoji on
    /// that ticket; otherwise merges the voter in. Voting twice with the
    /// same voter returns the aggregate unchanged.
    ///
    /// Fires the change listener after the mutation commits, so by the
    /// time this returns every current subscriber has the new snapshot in
    /// its outbound queue.
    pub fn add_voter(&self, resource_id: i64, emoji: &str, voter: &str) -> ReactionAggregate {
        let _gate = self.gate.lock().unwrap();
        let snapshot = {
            let mut table = self.table.lock().unwrap();
            let merged = table
                .aggregates
                .values_mut()
                .find(|a| a.resource_id == resource_id && a.emoji == emoji)
                .map(|aggregate| {
                    aggregate.add_voter(voter);
                    aggregate.clone()
                });

            match merged {
                Some(aggregate) => aggregate,
                None => {
                    let id = table.next_id;
                    table.next_id += 1;
                    let aggregate = ReactionAggregate::new(id, resource_id, emoji, voter);
                    table.aggregates.insert(id, aggregate.clone());
                    aggregate
                }
            }
        };
        self.emit_changed(resource_id);
        snapshot
    }

    /// Withdraw `voter`'s vote from the aggregate with id `reaction_id`
    ///
    /// Returns the updated aggregate, or `None` when it no longer exists,
    /// either because the id was unknown or because the last voter just
    /// left and the aggregate was deleted. An aggregate that belongs to a
    /// different ticket than `resource_id` is treated as unknown.
    pub fn remove_voter(
        &self,
        resource_id: i64,
        reaction_id: i64,
        voter: &str,
    ) -> Option<ReactionAggregate> {
        let _gate = self.gate.lock().unwrap();
        let outcome = {
            let mut table = self.table.lock().unwrap();
            let outcome = match table.aggregates.get_mut(&reaction_id) {
                Some(aggregate) if aggregate.resource_id == resource_id => {
                    if !aggregate.remove_voter(voter) {
                        Removal::Untouched(aggregate.clone())
                    } else if aggregate.voters.is_empty() {
                        Removal::Emptied
                    } else {
                        Removal::Updated(aggregate.clone())
                    }
                }
                _ => Removal::Unknown,
            };
            if matches!(outcome, Removal::Emptied) {
                table.aggregates.remove(&reaction_id);
            }
            outcome
        };

        match outcome {
            Removal::Unknown => None,
            Removal::Emptied => {
                self.emit_changed(resource_id);
                None
            }
            Removal::Untouched(aggregate) | Removal::Updated(aggregate) => {
                self.emit_changed(resource_id);
                Some(aggregate)
            }
        }
    }

    /// All aggregates for one ticket, first created first
    ///
    /// Ids are assigned monotonically, so id order is insertion order.
    /// Unknown tickets yield an empty list.
    pub fn list(&self, resource_id: i64) -> Vec<ReactionAggregate> {
        let table = self.table.lock().unwrap();
        let mut reactions: Vec<ReactionAggregate> = table
            .aggregates
            .values()
            .filter(|a| a.resource_id == resource_id)
            .cloned()
            .collect();
        reactions.sort_by_key(|a| a.id);
        reactions
    }

    fn emit_changed(&self, resource_id: i64) {
        let listener = self.listener.read().unwrap().clone();
        if let Some(listener) = listener {
            listener(resource_id);
        }
    }
}

impl Default for ReactionStore {
    fn default() -> Self {
        Self::new()
    }
}
