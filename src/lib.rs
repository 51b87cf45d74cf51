//! ChargeDesk - Main Library
//!
//! ChargeDesk is a maintenance-ticketing backend for EV charging stations,
//! featuring a JSON REST API for tickets, charger telemetry, maintenance
//! history and emoji reactions, plus a WebSocket push channel that keeps
//! every subscribed client's view of a ticket's reactions current.
//!
//! # Overview
//!
//! This library provides the core functionality for ChargeDesk, including:
//! - Ticket, telemetry-event and maintenance-history storage
//! - Emoji reaction aggregates with merge/removal semantics
//! - A per-ticket subscription registry over persistent WebSocket connections
//! - Broadcast-on-mutation: every committed reaction change is pushed as a
//!   full snapshot to all subscribers of that ticket
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - Ticket, event and maintenance record structures
//!   - Reaction aggregates and push-channel frames
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with REST and WebSocket handlers
//!   - In-memory stores and the subscription registry
//!   - Real-time broadcasting
//!
//! # Usage
//!
//! ```rust,no_run
//! use chargedesk::backend::server::init::create_app;
//! use chargedesk::backend::server::config::ServerConfig;
//!
//! let config = ServerConfig::from_env();
//! let app = create_app(&config);
//! // Use app with an Axum server
//! ```
//!
//! # Thread Safety
//!
//! All server state is thread-safe: stores sit behind `std::sync` locks with
//! short critical sections that never cross an `.await`, and outbound pushes
//! go through per-connection queues.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
