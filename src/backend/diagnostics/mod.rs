//! Diagnostics Backend Module
//!
//! Read-only access to a charger's system error log. Log content comes
//! from canned samples keyed off the server clock; real chargers would be
//! queried over their management link.

/// System error log handlers
pub mod handlers;

pub use handlers::get_sys_error_log;
