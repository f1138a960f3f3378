use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePixelArtDto {
    #[validate(length(min = 1, message = "Prompt is required"))]
    #[serde(default)]
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use super::*;

    #[test]
    fn missing_prompt_fails_validation() {
        let dto: GeneratePixelArtDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_prompt_fails_validation() {
        let dto: GeneratePixelArtDto = serde_json::from_value(json!({ "prompt": "" })).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn non_empty_prompt_passes_validation() {
        let dto: GeneratePixelArtDto = serde_json::from_value(json!({ "prompt": "cat" })).unwrap();
        assert!(dto.validate().is_ok());
    }
}
