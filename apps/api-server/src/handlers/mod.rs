//! HTTP handlers and route configuration.

mod health;
mod hello;
mod media;
mod posts;


use actix_web::web;

use crate::middleware::error::validation_error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Malformed bodies, queries, and paths become 422 problem documents
        .app_data(web::JsonConfig::default().error_handler(|err, _| validation_error(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _| validation_error(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _| validation_error(err)))
        .route("/hello-world", web::get().to(hello::hello_world))
        .route("/health", web::get().to(health::health_check))
        // Text posts
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post)),
        )
        .route("/posts/{id}", web::get().to(posts::get_post))
        // Media
        .route("/upload", web::post().to(media::upload))
        .route("/feed", web::get().to(media::feed));
}
