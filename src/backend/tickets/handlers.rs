//! Ticket HTTP Handlers
//!
//! REST endpoints for tickets, charger telemetry events and maintenance
//! history. Collection reads return empty lists for unknown children;
//! anything addressing a specific ticket returns 404 when it is missing.

use std::cmp::Ordering;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::backend::error::ApiError;
use crate::backend::tickets::store::TicketStore;
use crate::shared::event::{ChargerEvent, NewChargerEvent};
use crate::shared::maintenance::{MaintenanceRecord, NewMaintenanceRecord};
use crate::shared::ticket::{NewTicket, Ticket, TicketUpdate};

/// Query parameters accepted by GET /api/tickets
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// List tickets, with optional status filter, search and sorting
///
/// Precedence matches what the dashboard sends: a status filter wins,
/// then a search query, then explicit sorting. With no parameters the
/// most recently updated tickets come first.
pub async fn list_tickets(
    State(tickets): State<Arc<TicketStore>>,
    Query(query): Query<TicketListQuery>,
) -> Json<Vec<Ticket>> {
    if let Some(status) = query.status {
        let filtered = tickets
            .list_tickets()
            .into_iter()
            .filter(|t| t.status == status)
            .collect();
        return Json(filtered);
    }

    if let Some(search) = query.search.filter(|s| !s.trim().is_empty()) {
        return Json(tickets.search_tickets(search.trim()));
    }

    let mut all = tickets.list_tickets();
    match query.sort_by {
        Some(sort_by) => {
            let descending = query.sort_order.as_deref() == Some("desc");
            sort_tickets(&mut all, &sort_by, descending);
        }
        None => all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
    Json(all)
}

fn sort_tickets(tickets: &mut [Ticket], sort_by: &str, descending: bool) {
    let compare = |a: &Ticket, b: &Ticket| -> Ordering {
        match sort_by {
            "title" => a.title.cmp(&b.title),
            "status" => a.status.cmp(&b.status),
            "priority" => a.priority.cmp(&b.priority),
            "location" => a.location.cmp(&b.location),
            "createdAt" => a.created_at.cmp(&b.created_at),
            "updatedAt" => a.updated_at.cmp(&b.updated_at),
            // Unknown sort keys leave the order untouched.
            _ => Ordering::Equal,
        }
    };
    if descending {
        tickets.sort_by(|a, b| compare(b, a));
    } else {
        tickets.sort_by(compare);
    }
}

/// Get one ticket (GET /api/tickets/{id})
pub async fn get_ticket(
    State(tickets): State<Arc<TicketStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, ApiError> {
    tickets
        .get_ticket(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("ticket"))
}

/// File a new ticket (POST /api/tickets)
pub async fn create_ticket(
    State(tickets): State<Arc<TicketStore>>,
    Json(new): Json<NewTicket>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    if new.title.trim().is_empty() {
        return Err(ApiError::invalid_input("title must not be empty"));
    }
    let ticket = tickets.create_ticket(new);
    tracing::info!("Ticket {} created: {}", ticket.id, ticket.title);
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Partially update a ticket (PATCH /api/tickets/{id})
pub async fn update_ticket(
    State(tickets): State<Arc<TicketStore>>,
    Path(id): Path<i64>,
    Json(update): Json<TicketUpdate>,
) -> Result<Json<Ticket>, ApiError> {
    tickets
        .update_ticket(id, update)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("ticket"))
}

/// List telemetry events for a ticket (GET /api/tickets/{id}/events)
pub async fn list_events(
    State(tickets): State<Arc<TicketStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ChargerEvent>>, ApiError> {
    ensure_ticket(&tickets, id)?;
    Ok(Json(tickets.events_for(id)))
}

/// Record a telemetry event (POST /api/tickets/{id}/events)
pub async fn create_event(
    State(tickets): State<Arc<TicketStore>>,
    Path(id): Path<i64>,
    Json(new): Json<NewChargerEvent>,
) -> Result<(StatusCode, Json<ChargerEvent>), ApiError> {
    ensure_ticket(&tickets, id)?;
    Ok((StatusCode::CREATED, Json(tickets.create_event(id, new))))
}

/// List maintenance history (GET /api/tickets/{id}/maintenance-history)
pub async fn list_maintenance(
    State(tickets): State<Arc<TicketStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<MaintenanceRecord>>, ApiError> {
    ensure_ticket(&tickets, id)?;
    Ok(Json(tickets.maintenance_for(id)))
}

/// Record a maintenance visit (POST /api/tickets/{id}/maintenance-history)
pub async fn create_maintenance(
    State(tickets): State<Arc<TicketStore>>,
    Path(id): Path<i64>,
    Json(new): Json<NewMaintenanceRecord>,
) -> Result<(StatusCode, Json<MaintenanceRecord>), ApiError> {
    ensure_ticket(&tickets, id)?;
    Ok((StatusCode::CREATED, Json(tickets.create_maintenance(id, new))))
}

fn ensure_ticket(tickets: &TicketStore, id: i64) -> Result<(), ApiError> {
    tickets
        .get_ticket(id)
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("ticket"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ticket::NewTicket;

    fn store_with(titles: &[(&str, &str)]) -> Arc<TicketStore> {
        let store = Arc::new(TicketStore::new());
        for (title, status) in titles {
            store.create_ticket(NewTicket {
                title: title.to_string(),
                description: "d".to_string(),
                location: "l".to_string(),
                location_details: "ld".to_string(),
                status: status.to_string(),
                priority: "normal".to_string(),
                charger_model: "m".to_string(),
                charger_type: "ct".to_string(),
                charger_serial_number: "sn".to_string(),
                reported_by: "r".to_string(),
                assigned_to: None,
                installed_at: None,
                last_maintenance: None,
                firmware_version: None,
                connectivity: None,
                site_contact: None,
                contact_phone: None,
                operating_hours: None,
            });
        }
        store
    }

    #[tokio::test]
    async fn test_status_filter() {
        let store = store_with(&[("a", "open"), ("b", "resolved"), ("c", "open")]);
        let Json(tickets) = list_tickets(
            State(store),
            Query(TicketListQuery {
                status: Some("open".to_string()),
                ..TicketListQuery::default()
            }),
        )
        .await;
        assert_eq!(tickets.len(), 2);
        assert!(tickets.iter().all(|t| t.status == "open"));
    }

    #[tokio::test]
    async fn test_sort_by_title_ascending() {
        let store = store_with(&[("bravo", "open"), ("alpha", "open"), ("charlie", "open")]);
        let Json(tickets) = list_tickets(
            State(store),
            Query(TicketListQuery {
                sort_by: Some("title".to_string()),
                ..TicketListQuery::default()
            }),
        )
        .await;
        let titles: Vec<&str> = tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha", "bravo", "charlie"]);
    }

    #[tokio::test]
    async fn test_get_missing_ticket_is_404() {
        let store = store_with(&[]);
        let result = get_ticket(State(store), Path(9)).await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let store = store_with(&[]);
        let new = NewTicket {
            title: "  ".to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            location_details: "ld".to_string(),
            status: "open".to_string(),
            priority: "normal".to_string(),
            charger_model: "m".to_string(),
            charger_type: "ct".to_string(),
            charger_serial_number: "sn".to_string(),
            reported_by: "r".to_string(),
            assigned_to: None,
            installed_at: None,
            last_maintenance: None,
            firmware_version: None,
            connectivity: None,
            site_contact: None,
            contact_phone: None,
            operating_hours: None,
        };
        let result = create_ticket(State(store), Json(new)).await;
        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    }
}
