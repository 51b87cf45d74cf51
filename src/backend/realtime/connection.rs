/**
 * WebSocket Connection Handler
 *
 * This module implements the per-connection message loop behind
 * `GET /ws`. A connection has two states, connected and closed; subscribe
 * and unsubscribe are actions within the connected state, not states of
 * their own.
 *
 * # Lifecycle
 *
 * - On upgrade, the connection gets a fresh handle and an outbound queue.
 *   A forward task drains the queue onto the socket while the main task
 *   reads inbound frames.
 * - A subscribe frame registers the connection and immediately pushes one
 *   snapshot of the ticket's current reactions to this connection only,
 *   so a new subscriber sees current state even if nothing mutates
 *   afterwards.
 * - An unsubscribe frame drops the registration.
 * - A malformed or unrecognized frame is logged and ignored; it never
 *   terminates the connection.
 * - When the transport closes or errors, the connection's subscriptions
 *   are removed in one sweep and both tasks end.
 */
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use crate::backend::reactions::store::ReactionStore;
use crate::backend::realtime::registry::{ConnectionHandle, SubscriptionRegistry};
use crate::backend::server::state::AppState;
use crate::shared::realtime::{ClientFrame, ServerFrame};

/// WebSocket upgrade handler (GET /ws)
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.registry.clone(), state.reactions.clone()))
}

/// Run one connection until the peer goes away
async fn handle_socket(
    socket: WebSocket,
    registry: Arc<SubscriptionRegistry>,
    reactions: Arc<ReactionStore>,
) {
    let (handle, mut outbound_rx) = ConnectionHandle::new();
    let connection_id = handle.id();
    info!("[Realtime] WebSocket connected: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();

    // Drain the outbound queue onto the socket. Ends when the queue's
    // senders are gone or the peer stops accepting writes.
    let mut forward_task = tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            match frame.to_json() {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("[Realtime] Failed to serialize push frame: {}", e);
                }
            }
        }
    });

    // Read inbound control frames until the transport closes or errors.
    let recv_registry = registry.clone();
    let mut receive_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(message) => {
                    if !handle_frame(message, &handle, &recv_registry, &reactions) {
                        break;
                    }
                }
                Err(e) => {
                    warn!("[Realtime] WebSocket receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut receive_task => {
            forward_task.abort();
        }
        _ = &mut forward_task => {
            receive_task.abort();
        }
    }

    // Implicit cleanup of all subscriptions owned by this connection.
    registry.unsubscribe_all(connection_id);

    info!("[Realtime] WebSocket disconnected: {}", connection_id);
}

/// Process one inbound frame
///
/// Returns `true` to keep the connection open, `false` on a close frame.
fn handle_frame(
    message: Message,
    handle: &ConnectionHandle,
    registry: &SubscriptionRegistry,
    reactions: &ReactionStore,
) -> bool {
    match message {
        Message::Text(text) => {
            match ClientFrame::from_json(&text) {
                Ok(ClientFrame::Subscribe { resource_id }) => {
                    registry.subscribe(resource_id, handle.clone());
                    debug!(
                        "[Realtime] Connection {} subscribed to ticket {}",
                        handle.id(),
                        resource_id
                    );

                    // Initial-sync snapshot, to this connection only.
                    let snapshot = ServerFrame::Reactions {
                        resource_id,
                        reactions: reactions.list(resource_id),
                    };
                    if handle.send(snapshot).is_err() {
                        debug!(
                            "[Realtime] Connection {} closed before initial snapshot",
                            handle.id()
                        );
                    }
                }
                Ok(ClientFrame::Unsubscribe { resource_id }) => {
                    registry.unsubscribe(resource_id, handle.id());
                    debug!(
                        "[Realtime] Connection {} unsubscribed from ticket {}",
                        handle.id(),
                        resource_id
                    );
                }
                Err(e) => {
                    // Bad frames are a client bug, not a reason to drop the link.
                    debug!("[Realtime] Ignoring frame from {}: {}", handle.id(), e);
                }
            }
            true
        }
        Message::Binary(_) => {
            debug!("[Realtime] Binary frames not supported, ignoring");
            true
        }
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            debug!("[Realtime] Close frame from {}", handle.id());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::reaction::ReactionAggregate;

    fn text(frame: &str) -> Message {
        Message::Text(frame.to_string().into())
    }

    fn setup() -> (Arc<SubscriptionRegistry>, Arc<ReactionStore>) {
        (
            Arc::new(SubscriptionRegistry::new()),
            Arc::new(ReactionStore::new()),
        )
    }

    #[test]
    fn test_subscribe_registers_and_sends_snapshot() {
        let (registry, reactions) = setup();
        reactions.add_voter(7, "👍", "alice");
        let (handle, mut rx) = ConnectionHandle::new();

        let keep_open = handle_frame(
            text(r#"{"type":"subscribe","resourceId":7}"#),
            &handle,
            &registry,
            &reactions,
        );

        assert!(keep_open);
        assert_eq!(registry.subscriber_count(7), 1);
        let ServerFrame::Reactions { resource_id, reactions: pushed } =
            rx.try_recv().expect("initial snapshot expected");
        assert_eq!(resource_id, 7);
        assert_eq!(pushed.len(), 1);
        assert!(pushed[0].has_voter("alice"));
    }

    #[test]
    fn test_subscribe_to_empty_ticket_still_snapshots() {
        let (registry, reactions) = setup();
        let (handle, mut rx) = ConnectionHandle::new();

        handle_frame(
            text(r#"{"type":"subscribe","resourceId":2}"#),
            &handle,
            &registry,
            &reactions,
        );

        let ServerFrame::Reactions { reactions: pushed, .. } = rx.try_recv().unwrap();
        assert_eq!(pushed, Vec::<ReactionAggregate>::new());
    }

    #[test]
    fn test_unsubscribe_deregisters() {
        let (registry, reactions) = setup();
        let (handle, mut rx) = ConnectionHandle::new();
        handle_frame(
            text(r#"{"type":"subscribe","resourceId":7}"#),
            &handle,
            &registry,
            &reactions,
        );
        let _ = rx.try_recv();

        let keep_open = handle_frame(
            text(r#"{"type":"unsubscribe","resourceId":7}"#),
            &handle,
            &registry,
            &reactions,
        );

        assert!(keep_open);
        assert_eq!(registry.subscriber_count(7), 0);
    }

    #[test]
    fn test_malformed_frames_keep_connection_open() {
        let (registry, reactions) = setup();
        let (handle, mut rx) = ConnectionHandle::new();

        assert!(handle_frame(text("not json"), &handle, &registry, &reactions));
        assert!(handle_frame(
            text(r#"{"type":"shout","resourceId":1}"#),
            &handle,
            &registry,
            &reactions,
        ));
        assert!(handle_frame(
            Message::Binary(vec![1, 2, 3].into()),
            &handle,
            &registry,
            &reactions,
        ));

        assert_eq!(registry.topic_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_close_frame_ends_loop() {
        let (registry, reactions) = setup();
        let (handle, _rx) = ConnectionHandle::new();
        assert!(!handle_frame(Message::Close(None), &handle, &registry, &reactions));
    }
}
