/**
 * Reaction Broadcasting
 *
 * The broadcast coordinator is the bridge between the reaction store and
 * the subscription registry. It is registered as the store's change
 * listener at startup, so `notify_changed` runs synchronously inside
 * every mutating call, after the mutation commits and before the caller
 * gets its response. That ordering means a client that mutates over REST
 * and immediately reads its own subscription sees its write.
 *
 * # Fan-out
 *
 * One snapshot frame is built per change and queued to every subscriber
 * of the affected ticket. Queues are unbounded and per-connection, so a
 * slow or dead peer cannot block the mutator or starve other peers; a
 * failed queue push means the connection is already closing and is
 * dropped silently. The next mutation re-broadcasts a fresh snapshot, so
 * there is nothing to retry.
 */
use std::sync::Arc;

use crate::backend::reactions::store::ReactionStore;
use crate::backend::realtime::registry::SubscriptionRegistry;
use crate::shared::realtime::ServerFrame;

/// Pushes reaction snapshots to subscribers after each mutation
pub struct BroadcastCoordinator {
    registry: Arc<SubscriptionRegistry>,
    reactions: Arc<ReactionStore>,
}

impl BroadcastCoordinator {
    pub fn new(registry: Arc<SubscriptionRegistry>, reactions: Arc<ReactionStore>) -> Self {
        Self { registry, reactions }
    }

    /// Push the current reaction list for `resource_id` to its subscribers
    ///
    /// Returns immediately when nobody is subscribed, without reading the
    /// store. Per-connection failures are logged and skipped; they never
    /// abort delivery to the remaining subscribers.
    pub fn notify_changed(&self, resource_id: i64) {
        let subscribers = self.registry.subscribers_of(resource_id);
        if subscribers.is_empty() {
            return;
        }

        let frame = ServerFrame::Reactions {
            resource_id,
            reactions: self.reactions.list(resource_id),
        };

        let mut delivered = 0;
        for handle in &subscribers {
            if handle.send(frame.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::debug!(
                    "[Realtime] Skipping closed connection {} for ticket {}",
                    handle.id(),
                    resource_id
                );
            }
        }
        tracing::debug!(
            "[Realtime] Ticket {} snapshot pushed to {}/{} subscribers",
            resource_id,
            delivered,
            subscribers.len()
        );
    }
}
