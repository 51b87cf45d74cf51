/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables,
 * with sensible defaults for local development.
 *
 * # Variables
 *
 * - `SERVER_PORT` - TCP port to listen on (default 3000)
 * - `CHARGEDESK_SEED` - Set to "0" or "false" to start with empty stores
 *
 * # Error Handling
 *
 * Configuration problems are logged but never prevent startup; bad values
 * fall back to their defaults.
 */

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// Whether to load demo tickets and reactions at startup
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT '{}', falling back to 3000", raw);
                3000
            }),
            Err(_) => 3000,
        };

        let seed_demo_data = !matches!(
            std::env::var("CHARGEDESK_SEED").as_deref(),
            Ok("0") | Ok("false")
        );

        Self {
            port,
            seed_demo_data,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            seed_demo_data: true,
        }
    }
}
