/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the WebSocket endpoint and the REST routes into a single Axum router.
 *
 * # Route Order
 *
 * 1. WebSocket upgrade (/ws)
 * 2. REST API routes
 * 3. Fallback handler (404)
 */
use axum::Router;

use crate::backend::realtime::connection::websocket_handler;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the stores and registry
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        // Push channel: duplex WebSocket carrying subscribe/unsubscribe
        // control frames in and reaction snapshots out
        .route("/ws", axum::routing::get(websocket_handler));

    // Add REST routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state
    router.with_state(app_state)
}
