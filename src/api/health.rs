//! Health check endpoint
//!
//! Goes straight to the registry rather than through the services; a
//! probe needs counts and uptime, not business logic.

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::trace;

use crate::storages::Registry;

/// Application start time, injected as app data at startup.
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub storage: StorageHealth,
}

#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub backend: String,
    pub users: usize,
    pub links: usize,
}

/// GET /api/health
pub async fn health_check(
    registry: web::Data<Arc<dyn Registry>>,
    app_start_time: web::Data<AppStartTime>,
) -> impl Responder {
    trace!("Received health check request");

    let (users, links) = registry.counts().await;
    let now = chrono::Utc::now();
    let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(HealthResponse {
            status: "ok".to_string(),
            timestamp: now.to_rfc3339(),
            uptime,
            storage: StorageHealth {
                backend: registry.backend_name().await,
                users,
                links,
            },
        })
}
