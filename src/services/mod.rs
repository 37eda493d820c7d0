//! Service layer for business logic shared by the HTTP handlers

mod link_service;
mod user_service;

pub use link_service::*;
pub use user_service::*;
