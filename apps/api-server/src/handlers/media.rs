//! Media upload and feed handlers.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use postboard_core::domain::{FileType, MediaPost, NewMediaPost};
use postboard_shared::dto::{FeedResponse, MediaPostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::upload::{self, SpooledFile, UploadError};

/// POST /upload
///
/// Multipart form with a `file` part and an optional `caption` part.
/// Every pipeline failure surfaces as a single 500 carrying its message.
pub async fn upload(state: web::Data<AppState>, payload: Multipart) -> AppResult<HttpResponse> {
    let form = upload::read_form(payload)
        .await
        .map_err(AppError::upload_failed)?;

    let Some(file) = form.file else {
        return Err(AppError::Validation(vec!["field `file` is required".to_string()]));
    };

    let post = publish(&state, file, form.caption)
        .await
        .map_err(AppError::upload_failed)?;

    Ok(HttpResponse::Ok().json(MediaPostResponse::from(post)))
}

/// Hand the spooled file to the media store, then record it.
/// The temporary file is removed when `file` drops at the end of this call.
async fn publish(
    state: &AppState,
    file: SpooledFile,
    caption: String,
) -> Result<MediaPost, UploadError> {
    let stored = state.media_store.upload(file.as_media_upload()).await?;

    let post = MediaPost::new(NewMediaPost {
        caption,
        url: stored.url,
        file_type: FileType::from_content_type(file.content_type.as_deref()),
        file_name: stored.name,
    });
    let saved = state.media_posts.insert(post).await?;

    tracing::info!(
        post_id = %saved.id,
        file_type = %saved.file_type,
        size = file.size,
        "Media post created"
    );

    Ok(saved)
}

/// GET /feed
pub async fn feed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .media_posts
        .list_recent()
        .await?
        .into_iter()
        .map(MediaPostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(FeedResponse { posts }))
}
