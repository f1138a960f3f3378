use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::sync::OnceCell;
use tower_http::cors::{Any, CorsLayer};

use crate::{app::env::Envy, pixelart::models::pixel_art_generator::PixelArtGenerator};

pub mod app;
pub mod pixelart;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub pixel_art_generator: Arc<OnceCell<PixelArtGenerator>>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    return Router::new()
        .route(
            "/",
            get(app::controller::get_root).fallback(app::controller::not_found),
        )
        .route(
            "/health",
            get(app::controller::get_health).fallback(app::controller::not_found),
        )
        .route(
            "/generate-pixel-art",
            post(pixelart::controller::generate_pixel_art).fallback(app::controller::not_found),
        )
        .fallback(app::controller::not_found)
        .layer(cors)
        .with_state(state);
}
