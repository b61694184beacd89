//! Football club management API.
//!
//! `model` holds the JSON data transfer objects exchanged over HTTP, `server` holds
//! everything needed to serve them: routing, controllers, services and repositories.

pub mod model;
pub mod server;
