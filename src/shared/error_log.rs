/**
 * Diagnostic System Error Logs
 *
 * Read-only log entries surfaced by the charger's diagnostic endpoint.
 * The `info` field is free-form JSON because each charger module reports
 * its own detail shape (voltages, request URIs, card ids and so on).
 */
use serde::{Deserialize, Serialize};

/// One entry from a charger's system error log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SysErrorLog {
    pub id: i64,
    /// Epoch milliseconds
    pub timestamp: i64,
    /// RFC 3339 rendering of `timestamp`
    pub create_time: String,
    pub ip: String,
    pub tags: Vec<String>,
    pub module_name: String,
    pub error_code: String,
    pub action: String,
    pub description: String,
    pub info: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_round_trip() {
        let entry = SysErrorLog {
            id: 1001,
            timestamp: 1_715_000_000_000,
            create_time: "2024-05-06T12:53:20Z".to_string(),
            ip: "192.168.1.100".to_string(),
            tags: vec!["charger".to_string(), "connection".to_string()],
            module_name: "ConnectionManager".to_string(),
            error_code: "E-304".to_string(),
            action: "CONNECT".to_string(),
            description: "TLS handshake timeout".to_string(),
            info: serde_json::json!({"requestUri": "/api/payment/process"}),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("moduleName"));
        assert!(json.contains("errorCode"));
        let back: SysErrorLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
