use actix_web::HttpResponse;
use postboard_shared::dto::MessageResponse;

/// GET /hello-world
pub async fn hello_world() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello World".to_string(),
    })
}
