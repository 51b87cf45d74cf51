/**
 * API Route Handlers
 *
 * This module wires the REST endpoints, including:
 * - Ticket CRUD (list/filter/search/sort, get, create, patch)
 * - Charger telemetry events per ticket
 * - Maintenance history per ticket
 * - Emoji reactions per ticket (the mutating routes trigger push fan-out)
 * - The diagnostic system-error-log read-out
 *
 * # Routes
 *
 * ## Tickets
 * - `GET /api/tickets` - List with optional status/search/sort parameters
 * - `POST /api/tickets` - File a new ticket
 * - `GET /api/tickets/{id}` - Fetch one ticket
 * - `PATCH /api/tickets/{id}` - Partial update
 *
 * ## Per-ticket children
 * - `GET|POST /api/tickets/{id}/events`
 * - `GET|POST /api/tickets/{id}/maintenance-history`
 * - `GET|POST /api/tickets/{id}/reactions`
 * - `DELETE /api/tickets/{ticket_id}/reactions/{reaction_id}/voters/{voter}`
 *
 * ## Diagnostics
 * - `GET /charging/sys_error_log?id={ticketId}`
 */
use axum::Router;

use crate::backend::diagnostics::handlers::get_sys_error_log;
use crate::backend::reactions::handlers::{add_reaction, list_reactions, remove_reaction};
use crate::backend::server::state::AppState;
use crate::backend::tickets::handlers::{
    create_event, create_maintenance, create_ticket, get_ticket, list_events, list_maintenance,
    list_tickets, update_ticket,
};

/// Configure REST routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Ticket endpoints
        .route(
            "/api/tickets",
            axum::routing::get(list_tickets).post(create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            axum::routing::get(get_ticket).patch(update_ticket),
        )
        // Charger telemetry events
        .route(
            "/api/tickets/{id}/events",
            axum::routing::get(list_events).post(create_event),
        )
        // Maintenance history
        .route(
            "/api/tickets/{id}/maintenance-history",
            axum::routing::get(list_maintenance).post(create_maintenance),
        )
        // Emoji reactions; mutations broadcast to subscribers before responding
        .route(
            "/api/tickets/{id}/reactions",
            axum::routing::get(list_reactions).post(add_reaction),
        )
        .route(
            "/api/tickets/{ticket_id}/reactions/{reaction_id}/voters/{voter}",
            axum::routing::delete(remove_reaction),
        )
        // Charger diagnostic log
        .route(
            "/charging/sys_error_log",
            axum::routing::get(get_sys_error_log),
        )
}
