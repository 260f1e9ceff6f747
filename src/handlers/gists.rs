//! Gist handlers
//!
//! One HTTP handler per proxied gist operation. Each shapes the request
//! for the upstream client and wraps the sanitized outcome in the fixed
//! `{success, data|message}` envelope.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{CreateGistRequest, CreatedGist, HistoryPage, UpdateGistRequest};
use crate::services::{revisions_containing_file, sanitize_commit_entry, sanitize_gist};
use crate::AppState;

/// Standard success envelope carrying a data payload
#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    success: bool,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard success envelope carrying only a message
#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: &'static str,
}

impl MessageResponse {
    fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// POST /
///
/// Create a gist holding a single file.
///
/// Responds with only the new gist's id and file map, exactly as the
/// upstream returned them. Every failure here, including an upstream 404,
/// collapses to the generic 500 envelope.
pub async fn create_gist(
    state: web::Data<AppState>,
    body: web::Json<CreateGistRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let gist = state
        .upstream
        .create(
            request.description.as_deref(),
            request.public.unwrap_or(false),
            &request.filename,
            &request.content,
        )
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(CreatedGist::from(gist))))
}

/// GET /{id}
///
/// Fetch a gist and return it sanitized: provider bookkeeping stripped
/// from the top level, raw-content URLs stripped from every file.
pub async fn get_gist(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let gist = state.upstream.gist(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(sanitize_gist(gist))))
}

/// PATCH /{id}
///
/// Upsert a single file's content. Success carries no data payload.
pub async fn update_gist(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateGistRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let request = body.into_inner();

    state
        .upstream
        .update(&id, &request.filename, &request.content)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Gist updated")))
}

/// DELETE /{id}
///
/// Delete a gist. Success carries no data payload.
pub async fn delete_gist(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    state.upstream.delete(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Gist deleted")))
}

/// GET /{id}/commits
///
/// One page of the gist's commit history, each entry sanitized, upstream
/// order preserved.
///
/// Query Parameters:
/// - page: forwarded to the upstream verbatim
/// - per_page: forwarded to the upstream verbatim
pub async fn list_commits(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HistoryPage>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let entries = state
        .upstream
        .commits(&id, query.page.as_deref(), query.per_page.as_deref())
        .await?;

    let clean: Vec<_> = entries.into_iter().map(sanitize_commit_entry).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::new(clean)))
}

/// Fetch one historical snapshot of a gist by revision id, sanitized the
/// same way as a live fetch.
///
/// Available to embedders but not mounted in the live route table; path
/// parameters are `{id}` and `{sha}`.
pub async fn get_revision(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, sha) = path.into_inner();
    let revision = state.upstream.revision(&id, &sha).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(sanitize_gist(revision))))
}

/// List the commit-history entries whose revision contains `{file}`.
///
/// Available to embedders but not mounted in the live route table; path
/// parameters are `{id}` and `{file}`, plus the usual pagination query.
pub async fn list_file_revisions(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<HistoryPage>,
) -> Result<HttpResponse, AppError> {
    let (id, file) = path.into_inner();
    let entries = revisions_containing_file(
        &state.upstream,
        &id,
        &file,
        query.page.as_deref(),
        query.per_page.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(entries)))
}

/// Configure the live gist routes
pub fn configure_gist_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(create_gist))
        .route("/{id}", web::get().to(get_gist))
        .route("/{id}", web::delete().to(delete_gist))
        .route("/{id}", web::patch().to(update_gist))
        .route("/{id}/commits", web::get().to(list_commits));
}
