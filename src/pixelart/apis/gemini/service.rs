use reqwest::{header, Response, StatusCode};

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{
    config,
    models::input_spec::{Content, GenerationConfig, InputSpec, Part},
    structs::gemini_generate_content_response::GeminiGenerateContentResponse,
};

pub async fn generate_content(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    full_prompt: &str,
) -> Result<GeminiGenerateContentResponse, ApiError> {
    let input_spec = provide_input_spec(full_prompt);

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert("x-goog-api-key", api_key.parse().unwrap());

    tracing::debug!(prompt_len = full_prompt.len(), "requesting gemini image");

    let url = format!("{}/{}:generateContent", api_url, config::MODEL);
    let result = client
        .post(url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();

            if !status.is_success() {
                let text = res.text().await.unwrap_or_default();
                tracing::error!(%status, %text);
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: ["Gemini API error: ", &status.to_string()].concat(),
                });
            }

            parse_response_to_gemini_generate_content_response(res).await
        }
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to send request to the Gemini API.".to_string(),
            })
        }
    }
}

fn provide_input_spec(full_prompt: &str) -> InputSpec {
    InputSpec {
        contents: vec![Content {
            parts: vec![Part {
                text: full_prompt.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        },
    }
}

async fn parse_response_to_gemini_generate_content_response(
    res: Response,
) -> Result<GeminiGenerateContentResponse, ApiError> {
    match res.text().await {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(gemini_generate_content_response) => Ok(gemini_generate_content_response),
            Err(_) => {
                tracing::error!(%text);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_spec_serializes_to_gemini_request_shape() {
        let input_spec = provide_input_spec("draw a cat");
        let json = serde_json::to_value(&input_spec).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "draw a cat");
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE", "TEXT"])
        );
    }
}
