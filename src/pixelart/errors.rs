use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PixelArtApiError {
    PromptRequired,
    MissingApiKey,
    NoImageProduced,
}

impl PixelArtApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required".to_string(),
            },
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "GEMINI_API_KEY environment variable is required".to_string(),
            },
            Self::NoImageProduced => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "No image generated in response".to_string(),
            },
        }
    }
}
