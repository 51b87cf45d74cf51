//! Backend Module
//!
//! This module contains all server-side code for the ChargeDesk application.
//! It provides a complete Axum HTTP server with a JSON REST API and a
//! WebSocket push channel for real-time reaction synchronization.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - In-memory ticket, event and maintenance-history storage
//! - The reaction store with merge/removal semantics
//! - Per-ticket subscription registry and broadcast-on-mutation fan-out
//! - Route configuration
//! - Backend-specific error types
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`tickets`** - Ticket, event and maintenance-history storage and handlers
//! - **`reactions`** - Reaction aggregate store and REST handlers
//! - **`realtime`** - Subscription registry, broadcast coordinator, WebSocket handler
//! - **`diagnostics`** - Read-only charger system-error-log endpoint
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── tickets/        - Ticket storage and handlers
//! ├── reactions/      - Reaction store and handlers
//! ├── realtime/       - Subscriptions and broadcasting
//! ├── diagnostics/    - System error log endpoint
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains the ticket
//! store, the reaction store and the subscription registry, each behind an
//! `Arc`. State is constructed once at startup by `server::init` and
//! injected into handlers; nothing reaches into another component's maps
//! directly.

/// Server initialization, state and configuration
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Ticket, event and maintenance-history storage and handlers
pub mod tickets;

/// Reaction aggregate store and handlers
pub mod reactions;

/// Subscription registry, broadcasting and the WebSocket handler
pub mod realtime;

/// Charger diagnostic log endpoint
pub mod diagnostics;

/// Backend error types
pub mod error;
