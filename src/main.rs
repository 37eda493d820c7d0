use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

use linkvault::api::health::AppStartTime;
use linkvault::api::routes::{
    auth_routes, health_routes, links_routes, preview_routes, users_routes,
};
use linkvault::config::{get_config, init_config};
use linkvault::services::{LinkService, UserService};
use linkvault::storages::RegistryFactory;
use linkvault::system::logging::init_logging;

#[actix_web::main]
async fn main() -> Result<()> {
    // Record application start time
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenv().ok();
    init_config();
    let config = get_config();

    // The guard must stay alive for the life of the process so buffered
    // log lines are flushed on exit.
    let _log_guard = init_logging(config);

    let registry = RegistryFactory::create().expect("Failed to initialize storage");
    info!("Using storage backend: {}", registry.backend_name().await);

    let user_service = Arc::new(UserService::new(registry.clone()));
    let link_service = Arc::new(LinkService::new(registry.clone()));

    let cors_enabled = config.server.cors;
    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        // Wide open when enabled; otherwise the browser's same-origin
        // policy stays in force.
        let cors = if cors_enabled {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(auth_routes())
            .service(users_routes())
            .service(links_routes())
            .service(health_routes())
            .service(preview_routes())
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
