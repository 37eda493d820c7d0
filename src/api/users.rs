//! User profile endpoints

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::debug;

use crate::services::{LinkService, ProfilePatch, UserService};

use super::helpers::error_from_service;
use super::types::{LinkListResponse, ProfileResponse, UpdateProfileRequest, UserUpdateResponse};

/// GET /api/users/{username}
///
/// Public profile view: the user plus their public links only.
pub async fn get_profile(
    username: web::Path<String>,
    users: web::Data<Arc<UserService>>,
) -> ActixResult<impl Responder> {
    debug!("Profile request for user: {}", username);

    match users.get_profile(&username).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(ProfileResponse {
            user: profile.user.into(),
            links: profile.links,
            link_count: profile.link_count,
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}

/// PUT /api/users/{username}
pub async fn update_profile(
    username: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
    users: web::Data<Arc<UserService>>,
) -> ActixResult<impl Responder> {
    debug!("Profile update request for user: {}", username);

    let payload = payload.into_inner();
    let patch = ProfilePatch {
        full_name: payload.full_name,
        bio: payload.bio,
        avatar: payload.avatar,
    };

    match users.update_profile(&username, patch).await {
        Ok(user) => Ok(HttpResponse::Ok().json(UserUpdateResponse {
            success: true,
            user,
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}

/// GET /api/users/{username}/links
///
/// The owner's full listing, private links included. Unknown users get
/// an empty list rather than a 404.
pub async fn list_user_links(
    username: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let links = links.links_by_user(&username).await;
    Ok(HttpResponse::Ok().json(LinkListResponse { links }))
}
