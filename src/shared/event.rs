/**
 * Charger Telemetry Events
 *
 * This module defines the event records a charging station reports while a
 * ticket is open: power cycles, charging sessions, diagnostics and errors.
 * Events are read-mostly and listed oldest first on a ticket's detail view.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One telemetry event reported by a charger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChargerEvent {
    pub id: i64,
    pub ticket_id: i64,
    pub timestamp: DateTime<Utc>,
    /// e.g. "Power On", "Charging Session #1458", "System Diagnostic"
    pub event_type: String,
    /// Free-form reading, e.g. "Error E-304" or "System Check: Pass"
    pub value: String,
    /// "Normal", "Warning" or "Error"
    pub status: String,
}

/// Payload for recording an event (POST /api/tickets/{id}/events)
///
/// `timestamp` defaults to the server clock when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewChargerEvent {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub event_type: String,
    pub value: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_round_trip() {
        let event = ChargerEvent {
            id: 3,
            ticket_id: 2,
            timestamp: Utc::now(),
            event_type: "Charging Session #1458".to_string(),
            value: "Error E-304".to_string(),
            status: "Error".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ticketId"));
        assert!(json.contains("eventType"));
        let back: ChargerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_new_event_timestamp_optional() {
        let json = r#"{"eventType":"Power On","value":"System Check: Pass","status":"Normal"}"#;
        let event: NewChargerEvent = serde_json::from_str(json).unwrap();
        assert!(event.timestamp.is_none());
    }
}
