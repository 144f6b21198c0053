//! # User Management Core
//!
//! Foundational types shared by every crate of the user management API.
//!
//! - [`errors`]: the [`AppError`] taxonomy, the [`FieldError`] violation type,
//!   and the translation of failures into HTTP responses
//!
//! # Example
//!
//! ```ignore
//! use usermgmt_core::errors::AppError;
//!
//! fn find(id: &str) -> Result<(), AppError> {
//!     Err(AppError::not_found(format!("user {id}")))
//! }
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, FieldError, Failure};
