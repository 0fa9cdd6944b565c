//! Configuration types.

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// Reads `PORT`; unset or unparseable values fall back to 3001.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001);
        Self { port }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3001 }
    }
}
