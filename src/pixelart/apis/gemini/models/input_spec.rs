use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub contents: Vec<Content>,
    #[serde(rename(serialize = "generationConfig"))]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename(serialize = "responseModalities"))]
    pub response_modalities: Vec<String>,
}
