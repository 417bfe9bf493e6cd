//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the band directory service API.
    pub bands_api_url: String,
    pub templates_dir: String,
    /// Signing key for the flash message cookie; at least 64 bytes.
    pub secret: String,
}
