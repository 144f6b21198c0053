//! # User Management Auth
//!
//! Bearer token validation for the user management API.
//!
//! The HTTP layer only ever talks to the [`TokenValidator`] trait, so the
//! implementation can be replaced (for instance by signed-token checking)
//! without touching the authentication middleware.
//!
//! - [`PlaceholderTokenValidator`]: accepts any non-empty token except the
//!   known-bad sentinel [`DENIED_TOKEN`]
//! - [`AllowListTokenValidator`]: accepts only a configured set of tokens
//!
//! # Example
//!
//! ```ignore
//! use usermgmt_auth::validator_from_config;
//! use usermgmt_config::AuthConfig;
//!
//! let validator = validator_from_config(&AuthConfig::from_env());
//! assert!(!validator.is_valid("invalid"));
//! ```

pub mod validator;

// Re-export commonly used types at crate root
pub use validator::{
    AllowListTokenValidator, DENIED_TOKEN, PlaceholderTokenValidator, TokenValidator,
    validator_from_config,
};
