//! Server Module
//!
//! This module contains all code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Server initialization and app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Port and seed toggle from the environment
//! 2. **State Creation**: Ticket store, reaction store, subscription registry
//! 3. **Broadcast Wiring**: The coordinator is registered as the reaction
//!    store's change listener
//! 4. **Seeding**: Demo data, unless disabled
//! 5. **Router Creation**: All routes and the WebSocket endpoint

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{build_state, create_app};
pub use state::AppState;
