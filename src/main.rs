use anyhow::Result;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use studybuddy::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    studybuddy::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let app = studybuddy::api::router()
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            CorsLayer::new()
                .allow_methods(Any)
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Study Buddy listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
