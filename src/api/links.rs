//! Link endpoints

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::debug;

use crate::services::{LinkPatch, LinkService, NewLink};

use super::helpers::error_from_service;
use super::types::{
    ClickResponse, CreateLinkRequest, DeleteResponse, LinkResponse, UpdateLinkRequest,
};

/// POST /api/links
pub async fn create_link(
    payload: web::Json<CreateLinkRequest>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    debug!(
        "Create link request from user {:?}: {:?}",
        payload.username, payload.title
    );

    let new = NewLink {
        username: payload.username,
        title: payload.title,
        url: payload.url,
        description: payload.description,
        is_public: payload.is_public,
    };

    match links.create_link(new).await {
        Ok(link) => Ok(HttpResponse::Ok().json(LinkResponse {
            success: true,
            link,
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}

/// GET /api/links/{id}
///
/// Returns the bare link record and counts a view.
pub async fn get_link(
    id: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    match links.fetch_link(&id).await {
        Ok(link) => Ok(HttpResponse::Ok().json(link)),
        Err(e) => Ok(error_from_service(&e)),
    }
}

/// PUT /api/links/{id}
pub async fn update_link(
    id: web::Path<String>,
    payload: web::Json<UpdateLinkRequest>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    debug!("Update link request for id: {}", id);

    let payload = payload.into_inner();
    let patch = LinkPatch {
        title: payload.title,
        url: payload.url,
        description: payload.description,
        is_public: payload.is_public,
    };

    match links.update_link(&id, patch).await {
        Ok(link) => Ok(HttpResponse::Ok().json(LinkResponse {
            success: true,
            link,
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}

/// DELETE /api/links/{id}
pub async fn delete_link(
    id: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    debug!("Delete link request for id: {}", id);

    match links.delete_link(&id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(DeleteResponse {
            success: true,
            message: "Link deleted".to_string(),
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}

/// POST /api/links/{id}/click
pub async fn register_click(
    id: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    match links.register_click(&id).await {
        Ok(clicks) => Ok(HttpResponse::Ok().json(ClickResponse {
            success: true,
            clicks,
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}
