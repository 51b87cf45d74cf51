/**
 * Maintenance History Records
 *
 * A maintenance record documents one completed service visit for the
 * charger a ticket refers to. Records are listed newest first.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed maintenance visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: i64,
    pub ticket_id: i64,
    pub title: String,
    pub description: String,
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
}

/// Payload for POST /api/tickets/{id}/maintenance-history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRecord {
    pub title: String,
    pub description: String,
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let record = MaintenanceRecord {
            id: 1,
            ticket_id: 2,
            title: "Scheduled Maintenance".to_string(),
            description: "Firmware update to v3.2.1, cleaned connectors.".to_string(),
            performed_by: "Alex Rodriguez".to_string(),
            performed_at: Utc::now(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("performedBy"));
        let back: MaintenanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
