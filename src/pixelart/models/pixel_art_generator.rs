use axum::http::StatusCode;
use bytes::Bytes;

use crate::{
    app::models::api_error::ApiError,
    pixelart::{
        apis::gemini::{
            self,
            structs::gemini_generate_content_response::{
                GeminiGenerateContentResponse, GeminiInlineData,
            },
        },
        errors::PixelArtApiError,
    },
};

#[derive(Debug, Clone)]
pub struct PixelArtGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl PixelArtGenerator {
    pub fn new(api_url: String, api_key: String) -> Self {
        return Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        };
    }

    pub async fn generate_composite(&self, prompt: &str) -> Result<Bytes, ApiError> {
        let full_prompt = provide_full_prompt(prompt);

        let response_result = gemini::service::generate_content(
            &self.client,
            &self.api_url,
            &self.api_key,
            &full_prompt,
        )
        .await;
        let Ok(response) = response_result else {
            return Err(response_result.unwrap_err());
        };

        let Some(inline_data) = first_inline_data(&response) else {
            return Err(PixelArtApiError::NoImageProduced.value());
        };

        let Ok(bytes) = base64::decode(&inline_data.data) else {
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to decode image data from the Gemini response.".to_string(),
            });
        };

        return Ok(Bytes::from(bytes));
    }
}

fn provide_full_prompt(prompt: &str) -> String {
    return format!(
        "Generate a single black and white pixel art image arranged in a 3x3 grid (3 rows, 3 columns). \
        Each cell should be of size 64x64 pixel art and show different variations of: {}. \
        Each variation should be a very simple pixel art easily recognizable as {}. \
        IMPORTANT: Make each variation unique with different angles, styles, or compositions. \
        The entire image should be 1024x1024 pixels. \
        Use only black pixels on a white background. \
        There should be no grid lines or borders between and or around the cells. \
        Fill each cell completely without any borders or padding within cells.",
        prompt, prompt
    );
}

// only the first candidate is considered, text parts are skipped
fn first_inline_data(response: &GeminiGenerateContentResponse) -> Option<&GeminiInlineData> {
    return response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| {
            content
                .parts
                .iter()
                .find_map(|part| part.inline_data.as_ref())
        });
}
