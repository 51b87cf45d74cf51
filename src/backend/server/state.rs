/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The ticket store (tickets, telemetry events, maintenance history)
 * - The reaction store (the authoritative reaction aggregates)
 * - The subscription registry (ticket -> live connections)
 *
 * All three are process-wide singletons with a defined lifecycle: they
 * are constructed once by `server::init` and torn down at process exit.
 * Handlers receive them by injection rather than via ambient globals,
 * which keeps each component testable in isolation.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract the one
 * store they need without taking the entire `AppState`:
 *
 * ```rust
 * use axum::extract::State;
 * use std::sync::Arc;
 * use chargedesk::backend::tickets::TicketStore;
 *
 * async fn handler(State(tickets): State<Arc<TicketStore>>) {
 *     let all = tickets.list_tickets();
 *     // ...
 * }
 * ```
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::reactions::store::ReactionStore;
use crate::backend::realtime::registry::SubscriptionRegistry;
use crate::backend::tickets::store::TicketStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Ticket, telemetry-event and maintenance-history storage
    pub tickets: Arc<TicketStore>,

    /// Authoritative reaction aggregates
    ///
    /// The store's change listener is wired to the broadcast coordinator
    /// during initialization, so mutating through it is what triggers
    /// push fan-out.
    pub reactions: Arc<ReactionStore>,

    /// Live subscriber index for the WebSocket push channel
    pub registry: Arc<SubscriptionRegistry>,
}

impl FromRef<AppState> for Arc<TicketStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tickets.clone()
    }
}

impl FromRef<AppState> for Arc<ReactionStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.reactions.clone()
    }
}

impl FromRef<AppState> for Arc<SubscriptionRegistry> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.registry.clone()
    }
}
