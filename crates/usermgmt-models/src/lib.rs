//! # User Management Models
//!
//! Domain models and DTOs for the user management API.
//!
//! - [`users`]: the [`User`] entity, the [`UserPayload`] request body, and the
//!   validation rules applied before any write
//!
//! # Example
//!
//! ```ignore
//! use usermgmt_models::users::UserPayload;
//!
//! let payload = UserPayload::new("", "not-an-email");
//! let violations = payload.violations();
//! assert_eq!(violations.len(), 2);
//! ```

pub mod users;

// Re-export commonly used types at crate root for convenience
pub use users::{User, UserPayload};
