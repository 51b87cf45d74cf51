/**
 * Ticket Data Structures
 *
 * This module defines the Ticket struct and its insert/update companions.
 * A ticket describes one reported problem with a charging station and is
 * the resource that telemetry events, maintenance records and emoji
 * reactions attach to.
 *
 * The structs are shared between server and clients, so field names are
 * serialized in camelCase to match the JSON API.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A maintenance ticket for one charging station
///
/// `created_at` and `updated_at` are assigned by the server; `updated_at`
/// is bumped on every successful PATCH.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Site name, e.g. "Metro Charging Hub"
    pub location: String,
    /// Street address or other site detail
    pub location_details: String,
    /// "open", "in-progress" or "resolved"
    pub status: String,
    /// "normal" or "high"
    pub priority: String,
    pub charger_model: String,
    pub charger_type: String,
    pub charger_serial_number: String,
    pub reported_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
}

/// Payload for creating a ticket (POST /api/tickets)
///
/// `status` and `priority` default to "open" and "normal" when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub location: String,
    pub location_details: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub charger_model: String,
    pub charger_type: String,
    pub charger_serial_number: String,
    pub reported_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub installed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub connectivity: Option<String>,
    #[serde(default)]
    pub site_contact: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub operating_hours: Option<String>,
}

fn default_status() -> String {
    "open".to_string()
}

fn default_priority() -> String {
    "normal".to_string()
}

/// Partial update payload for PATCH /api/tickets/{id}
///
/// Only the fields a technician can edit after filing. Absent fields are
/// left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}
