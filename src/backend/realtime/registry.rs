/**
 * Subscription Registry
 *
 * Maps ticket ids to the set of live WebSocket connections that want push
 * updates for them. The registry owns only the relation: a connection's
 * lifetime is decided by its socket task, which registers subscriptions
 * while the connection is open and calls `unsubscribe_all` exactly once
 * when it closes.
 *
 * # Handles
 *
 * A `ConnectionHandle` pairs a connection id with the sending half of that
 * connection's outbound queue. Handles are cheap to clone; the socket task
 * holds the receiving half and forwards queued frames to the peer. Sending
 * through a handle never blocks, so a slow peer cannot stall a broadcast.
 *
 * # Growth
 *
 * Per-ticket entries are pruned as soon as their subscriber set becomes
 * empty, so churn over short-lived tickets does not accumulate entries.
 */
use std::collections::HashMap;
use std::sync::RwLock;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::shared::realtime::ServerFrame;

/// Identifies one WebSocket connection for the registry's lifetime
pub type ConnectionId = Uuid;

/// The push side of one client connection
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    outbound: mpsc::UnboundedSender<ServerFrame>,
}

impl ConnectionHandle {
    /// Create a handle and the receiving half of its outbound queue
    ///
    /// The receiver goes to the socket task that owns the connection; the
    /// handle is what gets registered for subscriptions.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ServerFrame>) {
        let (outbound, rx) = mpsc::unbounded_channel();
        (
            Self {
                id: Uuid::new_v4(),
                outbound,
            },
            rx,
        )
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Whether the owning socket task is still draining the queue
    pub fn is_open(&self) -> bool {
        !self.outbound.is_closed()
    }

    /// Queue a frame for delivery
    ///
    /// Fails only when the connection has closed and its receiver is gone.
    pub fn send(&self, frame: ServerFrame) -> Result<(), ServerFrame> {
        self.outbound.send(frame).map_err(|e| e.0)
    }
}

/// Process-wide ticket -> subscribers index
///
/// Constructed once at startup and shared via `Arc`. All subscription
/// mutations go through these methods; nothing else touches the map.
#[derive(Default)]
pub struct SubscriptionRegistry {
    topics: RwLock<HashMap<i64, HashMap<ConnectionId, ConnectionHandle>>>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` for updates on `resource_id`
    ///
    /// Subscribing twice has the same effect as subscribing once.
    pub fn subscribe(&self, resource_id: i64, handle: ConnectionHandle) {
        let mut topics = self.topics.write().unwrap();
        topics
            .entry(resource_id)
            .or_default()
            .insert(handle.id(), handle);
    }

    /// Drop one subscription; no-op when it does not exist
    pub fn unsubscribe(&self, resource_id: i64, connection: ConnectionId) {
        let mut topics = self.topics.write().unwrap();
        if let Some(subscribers) = topics.get_mut(&resource_id) {
            subscribers.remove(&connection);
            if subscribers.is_empty() {
                topics.remove(&resource_id);
            }
        }
    }

    /// Drop every subscription owned by `connection`
    ///
    /// Called exactly once when a connection closes, so no ticket entry is
    /// left holding a handle to a dead socket.
    pub fn unsubscribe_all(&self, connection: ConnectionId) {
        let mut topics = self.topics.write().unwrap();
        topics.retain(|_, subscribers| {
            subscribers.remove(&connection);
            !subscribers.is_empty()
        });
    }

    /// Snapshot of the current subscribers for one ticket
    ///
    /// Unknown tickets yield an empty vector, not an error.
    pub fn subscribers_of(&self, resource_id: i64) -> Vec<ConnectionHandle> {
        let topics = self.topics.read().unwrap();
        topics
            .get(&resource_id)
            .map(|subscribers| subscribers.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of subscribers for one ticket
    pub fn subscriber_count(&self, resource_id: i64) -> usize {
        let topics = self.topics.read().unwrap();
        topics.get(&resource_id).map(HashMap::len).unwrap_or(0)
    }

    /// Number of tickets that currently have at least one subscriber
    pub fn topic_count(&self) -> usize {
        self.topics.read().unwrap().len()
    }
}
