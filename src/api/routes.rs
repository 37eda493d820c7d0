//! Route registration
//!
//! Routes are grouped into scopes by concern so the server setup (and
//! the tests) can mount them with one `.service()` call each.

use actix_web::web;

use super::auth::login;
use super::health::health_check;
use super::links::{create_link, delete_link, get_link, register_click, update_link};
use super::preview::preview_page;
use super::users::{get_profile, list_user_links, update_profile};

/// Auth routes `/api/auth`
///
/// - POST /login - log in, registering on first use
pub fn auth_routes() -> actix_web::Scope {
    web::scope("/api/auth").route("/login", web::post().to(login))
}

/// User routes `/api/users`
///
/// - GET /{username} - public profile with public links
/// - PUT /{username} - update profile fields
/// - GET /{username}/links - all links owned by the user
pub fn users_routes() -> actix_web::Scope {
    web::scope("/api/users")
        // /{username}/links must be before /{username}
        .route("/{username}/links", web::get().to(list_user_links))
        .route("/{username}", web::get().to(get_profile))
        .route("/{username}", web::put().to(update_profile))
}

/// Link routes `/api/links`
///
/// - POST - create a link
/// - GET /{id} - fetch a link, counting a view
/// - PUT /{id} - update link fields
/// - DELETE /{id} - delete a link
/// - POST /{id}/click - register a click-through
pub fn links_routes() -> actix_web::Scope {
    web::scope("/api/links")
        .route("", web::post().to(create_link))
        // /{id}/click must be before /{id}
        .route("/{id}/click", web::post().to(register_click))
        .route("/{id}", web::get().to(get_link))
        .route("/{id}", web::put().to(update_link))
        .route("/{id}", web::delete().to(delete_link))
}

/// Health routes `/api/health`
pub fn health_routes() -> actix_web::Scope {
    web::scope("/api/health").route("", web::get().to(health_check))
}

/// Preview routes `/preview`
pub fn preview_routes() -> actix_web::Scope {
    web::scope("/preview").route("/{id}", web::get().to(preview_page))
}
