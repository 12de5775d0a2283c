use hr_panel::{
    config::{get_config, init_config},
    middleware::cors::panel_cors,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config()?;

    let app_state = AppState::new(config.clone())?;
    info!("Backend API at {}", config.api_base_url);

    match app_state
        .sessions
        .bootstrap(config.telegram_init_data.as_deref())
        .await
    {
        Some(session) => info!(user = %session.user.name, "Panel started with an active session"),
        None => info!("Panel started signed out, waiting for Telegram sign-in"),
    }

    let app = routes::router(app_state)
        .layer(panel_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Panel listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
