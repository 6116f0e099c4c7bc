use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

pub mod error;
pub mod registry;
pub mod routes;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub registry: registry::GameRegistry,
}

/// Build the application router.
///
/// When `static_dir` is given, its contents are served under `/static` and
/// its `index.html` at `/`.
pub fn build_router(static_dir: Option<PathBuf>) -> (Router, AppState) {
    let state = AppState {
        registry: registry::GameRegistry::new(),
    };

    let mut app = Router::new()
        .merge(routes::api::router())
        .route("/up", get(routes::health::health_check));

    if let Some(dir) = static_dir {
        app = app
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .nest_service(
                "/static",
                ServiceBuilder::new()
                    .layer(SetResponseHeaderLayer::overriding(
                        axum::http::header::CACHE_CONTROL,
                        axum::http::HeaderValue::from_static("no-cache"),
                    ))
                    .service(ServeDir::new(dir)),
            );
    }

    let app = app.with_state(state.clone());
    (app, state)
}
