pub mod generate_pixel_art_dto;
