use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub gemini_api_key: Option<String>,
    pub gemini_api_url: Option<String>,
}
