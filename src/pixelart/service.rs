use crate::{
    app::models::api_error::ApiError,
    pixelart::{
        apis::gemini,
        dtos::generate_pixel_art_dto::GeneratePixelArtDto,
        errors::PixelArtApiError,
        models::{
            generate_pixel_art_response::GeneratePixelArtResponse,
            pixel_art_generator::PixelArtGenerator,
        },
        util::grid,
    },
    AppState,
};

// the generator is created on first use so the server can boot without a key
pub async fn get_pixel_art_generator(state: &AppState) -> Result<&PixelArtGenerator, ApiError> {
    return state
        .pixel_art_generator
        .get_or_try_init(|| async move {
            let Some(api_key) = &state.envy.gemini_api_key else {
                return Err(PixelArtApiError::MissingApiKey.value());
            };

            let api_url = state
                .envy
                .gemini_api_url
                .to_owned()
                .unwrap_or(gemini::config::API_URL.to_string());

            Ok(PixelArtGenerator::new(api_url, api_key.to_string()))
        })
        .await;
}

pub async fn generate_pixel_art(
    dto: &GeneratePixelArtDto,
    state: &AppState,
) -> Result<GeneratePixelArtResponse, ApiError> {
    let generator_result = get_pixel_art_generator(state).await;
    let Ok(generator) = generator_result else {
        return Err(generator_result.unwrap_err());
    };

    match generate_thumbnails(generator, &dto.prompt).await {
        Ok(images) => Ok(GeneratePixelArtResponse { images }),
        Err(e) => Err(ApiError {
            code: e.code,
            message: ["Error generating pixel art: ", &e.message].concat(),
        }),
    }
}

async fn generate_thumbnails(
    generator: &PixelArtGenerator,
    prompt: &str,
) -> Result<Vec<String>, ApiError> {
    let composite_result = generator.generate_composite(prompt).await;
    let Ok(composite) = composite_result else {
        return Err(composite_result.unwrap_err());
    };

    return grid::split_and_encode_grid(&composite);
}
