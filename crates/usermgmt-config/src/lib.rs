//! # User Management Config
//!
//! Configuration types for the user management API, loaded from environment
//! variables:
//!
//! - [`server`]: bind address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`auth`]: token validation configuration
//!
//! Unset or unparsable variables fall back to defaults; loading never fails.
//!
//! # Example
//!
//! ```ignore
//! use usermgmt_config::{AuthConfig, CorsConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let auth = AuthConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod server;

// Re-export commonly used types at crate root
pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use server::ServerConfig;

/// Splits a comma separated list, dropping blank entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
