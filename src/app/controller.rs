use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde_json::{json, Value};
use tokio::fs;

use crate::AppState;

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root(State(_state): State<AppState>) -> Result<Html<String>, ApiError> {
    match fs::read_to_string("index.html").await {
        Ok(html) => Ok(Html(html)),
        Err(_) => Err(ApiError {
            code: StatusCode::NOT_FOUND,
            message: "index.html not found".to_string(),
        }),
    }
}

pub async fn get_health(State(state): State<AppState>) -> Json<Value> {
    return Json(json!({
        "status": "healthy",
        "generator_initialized": state.pixel_art_generator.initialized(),
    }));
}

pub async fn not_found() -> ApiError {
    return DefaultApiError::NotFound.value();
}
