//! Blog post handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use blog_core::{BlogPostDraft, PostId, PostOutcome};
use blog_shared::ApiResponse;
use blog_shared::dto::ListPostsQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_ID_MESSAGE: &str = "Invalid post ID format";

fn parse_post_id(raw: &str) -> AppResult<PostId> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))
}

fn not_found(id: PostId) -> AppError {
    AppError::NotFound(format!("Blog post with ID {id} not found"))
}

/// GET /api/posts
///
/// Paged when both `pageNumber` and `pageSize` parse, searched when `search`
/// is non-blank. Paged and searched results are returned bare; the plain
/// listing is wrapped in the envelope.
pub async fn list_posts(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let query = web::Query::<ListPostsQuery>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();

    if let Some(page_request) = query.page_request() {
        let page = match query.search_term() {
            Some(term) => state.posts.search_page(term, page_request).await?,
            None => state.posts.get_page(page_request).await?,
        };
        return Ok(HttpResponse::Ok().json(page));
    }

    if let Some(term) = query.search_term() {
        let results = state.posts.search(term).await?;
        return Ok(HttpResponse::Ok().json(results));
    }

    let posts = state.posts.get_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state.posts.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<BlogPostDraft>,
) -> AppResult<HttpResponse> {
    match state.posts.create(body.into_inner()).await? {
        PostOutcome::Saved(post) => Ok(HttpResponse::Created().json(
            ApiResponse::ok_with_message(post, "Blog post created successfully"),
        )),
        PostOutcome::Invalid(errors) => Err(AppError::Validation(errors)),
        PostOutcome::NotFound => Err(AppError::Internal(
            "create reported a missing post".to_string(),
        )),
    }
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPostDraft>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    match state.posts.update(id, body.into_inner()).await? {
        PostOutcome::Saved(post) => Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
            post,
            "Blog post updated successfully",
        ))),
        PostOutcome::Invalid(errors) => Err(AppError::Validation(errors)),
        PostOutcome::NotFound => Err(not_found(id)),
    }
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    if state.posts.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(not_found(id))
    }
}
