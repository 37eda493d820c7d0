//! HTTP API
//!
//! Handlers, request/response types and route registration for the JSON
//! API and the preview pages.

pub mod auth;
pub mod health;
pub mod helpers;
pub mod links;
pub mod preview;
pub mod routes;
pub mod types;
pub mod users;
