/**
 * Ticket Store
 *
 * In-memory storage for tickets, charger telemetry events and maintenance
 * records. State lives for the process lifetime; there is no durability
 * layer behind it.
 *
 * Ids are assigned monotonically per collection, starting at 1. All
 * access goes through the methods here; handlers never see the maps.
 */
use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::shared::event::{ChargerEvent, NewChargerEvent};
use crate::shared::maintenance::{MaintenanceRecord, NewMaintenanceRecord};
use crate::shared::ticket::{NewTicket, Ticket, TicketUpdate};

#[derive(Default)]
struct TicketTable {
    tickets: HashMap<i64, Ticket>,
    events: HashMap<i64, ChargerEvent>,
    records: HashMap<i64, MaintenanceRecord>,
    next_ticket_id: i64,
    next_event_id: i64,
    next_record_id: i64,
}

/// Process-wide ticket storage
pub struct TicketStore {
    table: RwLock<TicketTable>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(TicketTable {
                next_ticket_id: 1,
                next_event_id: 1,
                next_record_id: 1,
                ..TicketTable::default()
            }),
        }
    }

    /// All tickets, in unspecified order; callers sort for presentation
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.table.read().unwrap().tickets.values().cloned().collect()
    }

    pub fn get_ticket(&self, id: i64) -> Option<Ticket> {
        self.table.read().unwrap().tickets.get(&id).cloned()
    }

    pub fn create_ticket(&self, new: NewTicket) -> Ticket {
        let mut table = self.table.write().unwrap();
        let id = table.next_ticket_id;
        table.next_ticket_id += 1;
        let now = Utc::now();
        let ticket = Ticket {
            id,
            title: new.title,
            description: new.description,
            location: new.location,
            location_details: new.location_details,
            status: new.status,
            priority: new.priority,
            charger_model: new.charger_model,
            charger_type: new.charger_type,
            charger_serial_number: new.charger_serial_number,
            reported_by: new.reported_by,
            assigned_to: new.assigned_to,
            created_at: now,
            updated_at: now,
            installed_at: new.installed_at,
            last_maintenance: new.last_maintenance,
            firmware_version: new.firmware_version,
            connectivity: new.connectivity,
            site_contact: new.site_contact,
            contact_phone: new.contact_phone,
            operating_hours: new.operating_hours,
        };
        table.tickets.insert(id, ticket.clone());
        ticket
    }

    /// Apply a partial update; bumps `updated_at` on success
    pub fn update_ticket(&self, id: i64, update: TicketUpdate) -> Option<Ticket> {
        let mut table = self.table.write().unwrap();
        let ticket = table.tickets.get_mut(&id)?;
        if let Some(title) = update.title {
            ticket.title = title;
        }
        if let Some(description) = update.description {
            ticket.description = description;
        }
        if let Some(status) = update.status {
            ticket.status = status;
        }
        if let Some(priority) = update.priority {
            ticket.priority = priority;
        }
        if let Some(assigned_to) = update.assigned_to {
            ticket.assigned_to = Some(assigned_to);
        }
        ticket.updated_at = Utc::now();
        Some(ticket.clone())
    }

    /// Case-insensitive substring search over the descriptive fields
    pub fn search_tickets(&self, query: &str) -> Vec<Ticket> {
        let needle = query.to_lowercase();
        self.table
            .read()
            .unwrap()
            .tickets
            .values()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
                    || t.location.to_lowercase().contains(&needle)
                    || t.charger_model.to_lowercase().contains(&needle)
                    || t.charger_serial_number.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Telemetry events for one ticket, oldest first
    pub fn events_for(&self, ticket_id: i64) -> Vec<ChargerEvent> {
        let table = self.table.read().unwrap();
        let mut events: Vec<ChargerEvent> = table
            .events
            .values()
            .filter(|e| e.ticket_id == ticket_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.timestamp);
        events
    }

    pub fn create_event(&self, ticket_id: i64, new: NewChargerEvent) -> ChargerEvent {
        let mut table = self.table.write().unwrap();
        let id = table.next_event_id;
        table.next_event_id += 1;
        let event = ChargerEvent {
            id,
            ticket_id,
            timestamp: new.timestamp.unwrap_or_else(Utc::now),
            event_type: new.event_type,
            value: new.value,
            status: new.status,
        };
        table.events.insert(id, event.clone());
        event
    }

    /// Maintenance records for one ticket, newest first
    pub fn maintenance_for(&self, ticket_id: i64) -> Vec<MaintenanceRecord> {
        let table = self.table.read().unwrap();
        let mut records: Vec<MaintenanceRecord> = table
            .records
            .values()
            .filter(|r| r.ticket_id == ticket_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        records
    }

    pub fn create_maintenance(&self, ticket_id: i64, new: NewMaintenanceRecord) -> MaintenanceRecord {
        let mut table = self.table.write().unwrap();
        let id = table.next_record_id;
        table.next_record_id += 1;
        let record = MaintenanceRecord {
            id,
            ticket_id,
            title: new.title,
            description: new.description,
            performed_by: new.performed_by,
            performed_at: new.performed_at,
        };
        table.records.insert(id, record.clone());
        record
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}
