//! Small movie API whose handlers fail in every way the responder covers

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use faultline_core::{FieldErrors, RequestContext};
use faultline_responder::Responder;
use faultline_server::ApiJson;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/movies", post(create_movie))
        .route("/v1/movies/{id}", get(show_movie).patch(update_movie))
        .route("/v1/me", get(show_me))
        .route("/v1/admin/users", get(list_users))
        .route("/v1/tokens/authentication", post(create_token))
        .route("/v1/search", get(search))
        .route("/v1/reports", get(reports))
        .route("/v1/crash", get(crash))
}

async fn create_movie(
    Extension(responder): Extension<Responder>,
    ctx: RequestContext,
    ApiJson(input): ApiJson<CreateMovie>,
) -> Response {
    let mut errors = FieldErrors::new();
    if input.title.is_empty() {
        errors.insert("title".to_owned(), "must be provided".to_owned());
    }
    if input.year < 1888 {
        errors.insert("year".to_owned(), "must be greater than 1888".to_owned());
    }
    if !errors.is_empty() {
        return responder.failed_validation(&ctx, errors);
    }

    (StatusCode::CREATED, Json(serde_json::json!({ "movie": { "title": input.title } }))).into_response()
}

async fn show_movie(Extension(responder): Extension<Responder>, ctx: RequestContext, Path(id): Path<String>) -> Response {
    match id.parse::<u64>() {
        Ok(1) => Json(serde_json::json!({ "movie": { "id": 1 } })).into_response(),
        _ => responder.not_found(&ctx),
    }
}

async fn update_movie(Extension(responder): Extension<Responder>, ctx: RequestContext, headers: HeaderMap) -> Response {
    match headers.get(header::IF_MATCH).and_then(|v| v.to_str().ok()) {
        Some("\"3\"") | None => StatusCode::NO_CONTENT.into_response(),
        Some(_) => responder.edit_conflict(&ctx),
    }
}

async fn show_me(Extension(responder): Extension<Responder>, ctx: RequestContext, headers: HeaderMap) -> Response {
    let Some(authorization) = headers.get(header::AUTHORIZATION) else {
        return responder.authentication_required(&ctx);
    };

    match authorization.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) {
        Some("active-token") => Json(serde_json::json!({ "user": { "activated": true } })).into_response(),
        Some("inactive-token") => responder.inactive_account(&ctx),
        _ => responder.invalid_authentication_token(&ctx),
    }
}

async fn list_users(Extension(responder): Extension<Responder>, ctx: RequestContext) -> Response {
    responder.not_permitted(&ctx)
}

async fn create_token(Extension(responder): Extension<Responder>, ctx: RequestContext) -> Response {
    responder.invalid_credentials(&ctx)
}

async fn search(Extension(responder): Extension<Responder>, ctx: RequestContext) -> Response {
    responder.rate_limit_exceeded(&ctx)
}

async fn reports(Extension(responder): Extension<Responder>, ctx: RequestContext) -> Response {
    responder.server_error(
        &ctx,
        anyhow::anyhow!("dial tcp 10.1.0.4:5432: connect: connection refused").context("loading report rows"),
    )
}

async fn crash() -> Response {
    panic!("report cache poisoned")
}
