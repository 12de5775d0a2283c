use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// The browser shell may be served from the Mini App host, not from us.
pub fn panel_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_origin(Any)
}
