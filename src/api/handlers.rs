//! Request handlers
//!
//! Each handler validates its input, calls one service operation and picks
//! the success status. Failures convert through [`ApiError`].

use super::error::ApiError;
use super::AppState;
use crate::domain::{Greeting, GreetingId, GreetingRequest};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

type ApiResult<T> = std::result::Result<T, ApiError>;

/// `POST /greetings`
pub async fn create_greeting(
    State(state): State<AppState>,
    payload: Result<Json<GreetingRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Greeting>)> {
    let Json(request) = payload?;
    let message = request.validate()?;

    let greeting = state.service.add_greeting(message).await?;
    Ok((StatusCode::CREATED, Json(greeting)))
}

/// `GET /greetings`
pub async fn list_greetings(State(state): State<AppState>) -> ApiResult<Json<Vec<Greeting>>> {
    Ok(Json(state.service.get_all_greetings().await?))
}

/// `GET /greetings/:id`
pub async fn get_greeting(
    State(state): State<AppState>,
    id: Result<Path<GreetingId>, PathRejection>,
) -> ApiResult<Json<Greeting>> {
    let Path(id) = id?;
    Ok(Json(state.service.get_greeting_by_id(id).await?))
}

/// `PUT /greetings/:id`
pub async fn update_greeting(
    State(state): State<AppState>,
    id: Result<Path<GreetingId>, PathRejection>,
    payload: Result<Json<GreetingRequest>, JsonRejection>,
) -> ApiResult<Json<Greeting>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let message = request.validate()?;

    Ok(Json(state.service.update_greeting(id, message).await?))
}

/// `DELETE /greetings/:id`
pub async fn delete_greeting(
    State(state): State<AppState>,
    id: Result<Path<GreetingId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.service.delete_greeting_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Response {
    let repository = state.service.repository();

    match repository.test_connection().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "backend": repository.backend_name() })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "backend": repository.backend_name() })),
            )
                .into_response()
        }
    }
}

/// Fallback for paths without a route
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, format!("No route for {}", uri.path()))
}

/// Fallback for a known path requested with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {method} is not allowed on {}", uri.path()),
    )
}
