//! Login endpoint
//!
//! There are no passwords: presenting a username is the whole handshake,
//! and unknown usernames become fresh accounts on the spot.

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::debug;

use crate::services::UserService;

use super::helpers::error_from_service;
use super::types::{LoginRequest, LoginResponse};

/// POST /api/auth/login
pub async fn login(
    payload: web::Json<LoginRequest>,
    users: web::Data<Arc<UserService>>,
) -> ActixResult<impl Responder> {
    debug!("Login request for username: {:?}", payload.username);

    match users.login_or_register(&payload.username).await {
        Ok(user) => Ok(HttpResponse::Ok().json(LoginResponse {
            success: true,
            user: user.into(),
        })),
        Err(e) => Ok(error_from_service(&e)),
    }
}
