//! Cross-cutting request pipeline stages.
//!
//! - [`error_handling`]: outermost failure boundary translating [`AppError`]s
//!   into JSON responses
//! - [`auth`]: bearer token gate in front of every non-public route
//!
//! Per request the order is fixed:
//!
//! ```text
//! handle_errors -> catch panic -> authenticate -> handler -> UserStore
//! ```
//!
//! [`AppError`]: usermgmt_core::errors::AppError

pub mod auth;
pub mod error_handling;
