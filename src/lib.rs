//! # User Management API
//!
//! A small REST service built with Rust and Axum exposing CRUD operations over
//! a single in-memory "user" resource, guarded by bearer token
//! authentication and a centralized error boundary.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/      # Request pipeline stages
//! │   ├── auth.rs            # Bearer token gate
//! │   └── error_handling.rs  # Failure boundary
//! ├── modules/         # Feature modules
//! │   ├── home/        # Public greeting, 404 and 405 fallbacks
//! │   └── users/       # User CRUD (controller, router, store)
//! ├── extractors.rs    # Body and path extractors rejecting with AppError
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # Subscriber setup and request logging
//! ├── router.rs        # Routes and middleware ordering
//! └── state.rs         # Shared application state
//! ```
//!
//! Workspace crates hold the pieces with no HTTP routing of their own:
//! `usermgmt-core` (errors), `usermgmt-config`, `usermgmt-auth` (token
//! validation) and `usermgmt-models` (entities and validation rules).
//!
//! ## Request pipeline
//!
//! ```text
//! request logging -> CORS -> error boundary -> panic capture -> auth -> handler
//! ```
//!
//! Handlers and the store return `Result<_, AppError>`; only the error
//! boundary turns failures into HTTP responses. Authentication rejections
//! are answered at the gate with `401 {"status", "message"}`.
//!
//! ## Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=http://localhost:3000,http://localhost:5173
//! AUTH_TOKENS=token-a,token-b   # optional allow-list
//! LOG_LEVEL=info
//! LOG_FORMAT=json               # optional
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | GET | `/` | public |
//! | GET | `/swagger/openapi.json` | public |
//! | GET, POST | `/api/users` | bearer |
//! | GET, PUT, DELETE | `/api/users/{id}` | bearer |

pub mod docs;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use usermgmt_auth;
pub use usermgmt_config;
pub use usermgmt_core;
pub use usermgmt_models;
