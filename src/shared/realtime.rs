/**
 * Push-Channel Wire Frames
 *
 * This module defines the JSON frames exchanged over the WebSocket push
 * channel. The channel is receive-only for clients apart from the two
 * control frames: clients subscribe to and unsubscribe from tickets, and
 * the server pushes full reaction snapshots.
 *
 * # Wire Format
 *
 * Client to server:
 *
 * ```json
 * {"type": "subscribe", "resourceId": 7}
 * {"type": "unsubscribe", "resourceId": 7}
 * ```
 *
 * Server to client:
 *
 * ```json
 * {"type": "reactions", "resourceId": 7, "reactions": [ ... ]}
 * ```
 *
 * Snapshots always carry the full current reaction list, never deltas, so
 * a client's view is self-correcting on every push.
 */
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::reaction::ReactionAggregate;

/// Push-channel frame errors
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed frame: {0}")]
    Malformed(String),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Control frames sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Subscribe to reaction updates for one ticket
    #[serde(rename_all = "camelCase")]
    Subscribe { resource_id: i64 },
    /// Stop receiving updates for one ticket
    #[serde(rename_all = "camelCase")]
    Unsubscribe { resource_id: i64 },
}

impl ClientFrame {
    /// Parse a frame from its JSON text
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        serde_json::from_str(json).map_err(|e| FrameError::Malformed(e.to_string()))
    }
}

/// Frames pushed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// Full snapshot of one ticket's reaction list
    #[serde(rename_all = "camelCase")]
    Reactions {
        resource_id: i64,
        reactions: Vec<ReactionAggregate>,
    },
}

impl ServerFrame {
    /// Serialize to JSON text for the socket
    pub fn to_json(&self) -> Result<String, FrameError> {
        serde_json::to_string(self).map_err(FrameError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subscribe() {
        let frame = ClientFrame::from_json(r#"{"type":"subscribe","resourceId":7}"#).unwrap();
        assert_eq!(frame, ClientFrame::Subscribe { resource_id: 7 });
    }

    #[test]
    fn test_parse_unsubscribe() {
        let frame = ClientFrame::from_json(r#"{"type":"unsubscribe","resourceId":3}"#).unwrap();
        assert_eq!(frame, ClientFrame::Unsubscribe { resource_id: 3 });
    }

    #[test]
    fn test_malformed_frame_is_an_error() {
        assert!(ClientFrame::from_json("not json").is_err());
        assert!(ClientFrame::from_json(r#"{"type":"subscribe"}"#).is_err());
        assert!(ClientFrame::from_json(r#"{"type":"shout","resourceId":1}"#).is_err());
    }

    #[test]
    fn test_reactions_frame_shape() {
        let frame = ServerFrame::Reactions {
            resource_id: 7,
            reactions: vec![ReactionAggregate::new(1, 7, "🔥", "bob")],
        };
        let json = frame.to_json().unwrap();
        assert!(json.contains(r#""type":"reactions""#));
        assert!(json.contains(r#""resourceId":7"#));
        assert!(json.contains("🔥"));
        let back: ServerFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
