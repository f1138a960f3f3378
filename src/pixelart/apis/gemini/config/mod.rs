pub static API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub static MODEL: &str = "gemini-2.5-flash-image-preview";
