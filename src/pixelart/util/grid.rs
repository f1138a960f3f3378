use std::io::Cursor;

use axum::http::StatusCode;
use image::{imageops::FilterType, DynamicImage, GenericImageView, GrayImage, ImageFormat};

use crate::app::models::api_error::ApiError;

pub static GRID_ROWS: u32 = 3;
pub static GRID_COLS: u32 = 3;
pub static CENTER_CROP_SIZE: u32 = 320;
pub static THUMBNAIL_SIZE: u32 = 64;
pub static MONOCHROME_THRESHOLD: u8 = 128;

pub fn split_and_encode_grid(composite: &[u8]) -> Result<Vec<String>, ApiError> {
    let grid_image = match image::load_from_memory(composite) {
        Ok(grid_image) => grid_image,
        Err(e) => {
            tracing::error!(%e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to decode composite image.".to_string(),
            });
        }
    };

    let (width, height) = grid_image.dimensions();
    let cell_width = width / GRID_COLS;
    let cell_height = height / GRID_ROWS;

    if cell_width < CENTER_CROP_SIZE || cell_height < CENTER_CROP_SIZE {
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: [
                "Composite image cells are ",
                &cell_width.to_string(),
                "x",
                &cell_height.to_string(),
                "; the center crop requires at least ",
                &CENTER_CROP_SIZE.to_string(),
                "x",
                &CENTER_CROP_SIZE.to_string(),
                ".",
            ]
            .concat(),
        });
    }

    let offset_x = (cell_width - CENTER_CROP_SIZE) / 2;
    let offset_y = (cell_height - CENTER_CROP_SIZE) / 2;

    let mut encoded_images = Vec::new();

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let cell_image =
                grid_image.crop_imm(col * cell_width, row * cell_height, cell_width, cell_height);
            let center_crop =
                cell_image.crop_imm(offset_x, offset_y, CENTER_CROP_SIZE, CENTER_CROP_SIZE);
            let thumbnail = process_cell(center_crop);

            match encode_data_uri(&thumbnail) {
                Ok(encoded) => encoded_images.push(encoded),
                Err(e) => return Err(e),
            }
        }
    }

    return Ok(encoded_images);
}

fn process_cell(center_crop: DynamicImage) -> GrayImage {
    let thumbnail = center_crop.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Nearest);
    let mut monochrome = thumbnail.to_luma8();

    // fixed threshold, no dithering, so identical inputs give identical bytes
    for pixel in monochrome.pixels_mut() {
        pixel.0[0] = if pixel.0[0] < MONOCHROME_THRESHOLD { 0 } else { 255 };
    }

    return monochrome;
}

fn encode_data_uri(thumbnail: &GrayImage) -> Result<String, ApiError> {
    let mut buffer = Cursor::new(Vec::new());

    match thumbnail.write_to(&mut buffer, ImageFormat::Png) {
        Ok(_) => Ok([
            "data:",
            mime::IMAGE_PNG.as_ref(),
            ";base64,",
            &base64::encode(buffer.get_ref()),
        ]
        .concat()),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to encode thumbnail.".to_string(),
            })
        }
    }
}
