//! User resource: CRUD handlers over the in-memory [`store::UserStore`].

pub mod controller;
pub mod router;
pub mod store;
