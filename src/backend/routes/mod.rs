//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - REST endpoint wiring under /api and /charging
//!
//! # Route Types
//!
//! ## Push Channel
//!
//! - `GET /ws` - WebSocket upgrade for reaction subscriptions
//!
//! ## REST
//!
//! - `/api/tickets` and its children (events, maintenance history,
//!   reactions)
//! - `/charging/sys_error_log` - Diagnostic log read-out
//!
//! Unknown routes fall through to a plain 404 handler.

/// Main router creation
pub mod router;

/// REST endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
