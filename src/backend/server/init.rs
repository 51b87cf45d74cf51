/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: state creation, broadcast wiring, demo data seeding and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Create the ticket store, reaction store and subscription registry
 * 2. Register the broadcast coordinator as the reaction store's change
 *    listener, so every committed mutation fans out before its caller
 *    gets a response
 * 3. Seed demo data if configured
 * 4. Create and configure the router
 */
use std::sync::Arc;

use axum::Router;

use crate::backend::reactions::store::ReactionStore;
use crate::backend::realtime::broadcast::BroadcastCoordinator;
use crate::backend::realtime::registry::SubscriptionRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::tickets::seed::load_demo_data;
use crate::backend::tickets::store::TicketStore;

/// Construct the application state with broadcasting wired up
///
/// The returned state is fully operational: mutating the reaction store
/// will push snapshots to whatever connections are registered. Used by
/// `create_app` and directly by integration tests.
pub fn build_state() -> AppState {
    let tickets = Arc::new(TicketStore::new());
    let reactions = Arc::new(ReactionStore::new());
    let registry = Arc::new(SubscriptionRegistry::new());

    // The coordinator lives inside the store's listener slot; invoking
    // any mutation runs the fan-out synchronously after commit.
    let coordinator = Arc::new(BroadcastCoordinator::new(registry.clone(), reactions.clone()));
    reactions.set_change_listener(Arc::new(move |resource_id| {
        coordinator.notify_changed(resource_id)
    }));

    AppState {
        tickets,
        reactions,
        registry,
    }
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing ChargeDesk backend server");

    let app_state = build_state();

    if config.seed_demo_data {
        load_demo_data(&app_state.tickets, &app_state.reactions);
    } else {
        tracing::info!("Demo data seeding disabled");
    }

    tracing::info!("Stores and broadcast wiring initialized");

    create_router(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::realtime::registry::ConnectionHandle;
    use crate::shared::realtime::ServerFrame;

    #[test]
    fn test_build_state_wires_broadcasting() {
        let state = build_state();
        let (handle, mut rx) = ConnectionHandle::new();
        state.registry.subscribe(7, handle);

        state.reactions.add_voter(7, "🔥", "bob");

        let ServerFrame::Reactions { resource_id, reactions } =
            rx.try_recv().expect("mutation should push a snapshot");
        assert_eq!(resource_id, 7);
        assert_eq!(reactions.len(), 1);
    }
}
