use std::{env, net::SocketAddr, sync::Arc};

use pixelart_api::{app::env::Envy, router, AppState};
use tokio::sync::OnceCell;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(8000);

    let state = AppState {
        envy: Arc::new(envy),
        pixel_art_generator: Arc::new(OnceCell::new()),
    };

    // app
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
