use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeminiGenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPart {
    #[serde(rename(deserialize = "inlineData"))]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename(deserialize = "mimeType"))]
    pub mime_type: Option<String>,
    pub data: String,
}
