pub mod generate_pixel_art_response;
pub mod pixel_art_generator;
