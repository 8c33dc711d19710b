//! Text post handlers.

use actix_web::{HttpResponse, http::header, web};

use postboard_core::DomainError;
use postboard_shared::dto::{
    CreateTextPostRequest, ListPostsQuery, TextPostListing, TextPostResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts?limit=N
///
/// A positive limit yields an array of the first N posts. No limit, or zero,
/// yields every post keyed by id.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> HttpResponse {
    let limit = query.limit.filter(|n| *n > 0);
    let posts = state.text_posts.list(limit).await;

    let listing = match limit {
        Some(_) => TextPostListing::page(posts),
        None => TextPostListing::all(posts),
    };

    HttpResponse::Ok().json(listing)
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .text_posts
        .get(id)
        .await
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        })?;

    Ok(HttpResponse::Ok().json(TextPostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateTextPostRequest>,
) -> HttpResponse {
    let post = state.text_posts.create(body.into_inner().into()).await;
    tracing::info!(post_id = post.id, "Text post created");

    HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(TextPostResponse::from(post))
}
