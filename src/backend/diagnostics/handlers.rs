//! System Error Log Handler
//!
//! Serves `GET /charging/sys_error_log?id=<ticketId>`. The ticket id is
//! validated against the store; the log entries themselves are sample
//! data spread over the past days, matching what the charger fleet's
//! management module reports.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::backend::error::ApiError;
use crate::backend::tickets::store::TicketStore;
use crate::shared::error_log::SysErrorLog;

/// Query parameters for the error log endpoint
#[derive(Debug, Deserialize)]
pub struct SysErrorLogQuery {
    pub id: Option<i64>,
}

/// Fetch the system error log for a ticket's charger
pub async fn get_sys_error_log(
    State(tickets): State<Arc<TicketStore>>,
    Query(query): Query<SysErrorLogQuery>,
) -> Result<Json<Vec<SysErrorLog>>, ApiError> {
    let ticket_id = query
        .id
        .ok_or_else(|| ApiError::invalid_input("missing ticket id"))?;
    tickets
        .get_ticket(ticket_id)
        .ok_or_else(|| ApiError::not_found("ticket"))?;

    Ok(Json(sample_logs(Utc::now())))
}

fn entry(
    id: i64,
    at: DateTime<Utc>,
    tags: &[&str],
    module_name: &str,
    error_code: &str,
    action: &str,
    description: &str,
    info: serde_json::Value,
) -> SysErrorLog {
    SysErrorLog {
        id,
        timestamp: at.timestamp_millis(),
        create_time: at.to_rfc3339(),
        ip: "192.168.1.100".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        module_name: module_name.to_string(),
        error_code: error_code.to_string(),
        action: action.to_string(),
        description: description.to_string(),
        info,
    }
}

fn sample_logs(now: DateTime<Utc>) -> Vec<SysErrorLog> {
    vec![
        entry(
            1001,
            now - Duration::hours(1),
            &["charger", "connection", "error"],
            "ConnectionManager",
            "E-304",
            "CONNECT",
            "Failed to establish secure connection with payment processor",
            serde_json::json!({
                "requestUri": "/api/payment/process",
                "errorDetails": "TLS handshake timeout after 30s"
            }),
        ),
        entry(
            1002,
            now - Duration::hours(2),
            &["charger", "system", "warning"],
            "PowerManagement",
            "E-187",
            "POWER_DELIVERY",
            "Voltage fluctuation detected outside of normal parameters",
            serde_json::json!({
                "voltage": "242V (expected 220-240V)",
                "fluctuation": "±8V"
            }),
        ),
        entry(
            1003,
            now - Duration::days(1),
            &["charger", "hardware", "critical"],
            "ThermalControl",
            "E-501",
            "TEMPERATURE_CHECK",
            "Critical temperature threshold exceeded, emergency shutdown initiated",
            serde_json::json!({
                "temperature": "78°C",
                "threshold": "75°C",
                "location": "Main converter"
            }),
        ),
        entry(
            1004,
            now - Duration::days(2),
            &["charger", "authentication", "error"],
            "AuthService",
            "E-203",
            "AUTHENTICATE",
            "RFID authentication failed - card not recognized",
            serde_json::json!({
                "cardId": "******7890",
                "attemptCount": 3
            }),
        ),
        entry(
            1005,
            now - Duration::days(3),
            &["charger", "firmware", "info"],
            "UpdateManager",
            "I-100",
            "FIRMWARE_UPDATE",
            "Firmware update process interrupted",
            serde_json::json!({
                "fromVersion": "v3.1.5",
                "toVersion": "v3.2.1",
                "progress": "68%"
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_logs_are_newest_first() {
        let logs = sample_logs(Utc::now());
        assert_eq!(logs.len(), 5);
        for pair in logs.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn test_missing_id_is_rejected() {
        let tickets = Arc::new(TicketStore::new());
        let result =
            get_sys_error_log(State(tickets), Query(SysErrorLogQuery { id: None })).await;
        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_unknown_ticket_is_404() {
        let tickets = Arc::new(TicketStore::new());
        let result =
            get_sys_error_log(State(tickets), Query(SysErrorLogQuery { id: Some(9) })).await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }
}
