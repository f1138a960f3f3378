use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePixelArtResponse {
    pub images: Vec<String>,
}
