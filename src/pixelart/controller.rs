use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_pixel_art_dto::GeneratePixelArtDto, errors::PixelArtApiError,
    models::generate_pixel_art_response::GeneratePixelArtResponse, service,
};

pub async fn generate_pixel_art(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GeneratePixelArtDto>,
) -> Result<Json<GeneratePixelArtResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_pixel_art(&dto, &state).await {
            Ok(generate_pixel_art_response) => Ok(Json(generate_pixel_art_response)),
            Err(e) => Err(e),
        },
        Err(_) => Err(PixelArtApiError::PromptRequired.value()),
    }
}
