//! JSON tree visualization server.
//!
//! Thin axum front end for `jsonvista-core`: parses the request body, runs the
//! layout engine, and returns the positioned graph. Exposed as a library so
//! integration tests can build the router in-process.

pub mod handlers;
pub mod router;
