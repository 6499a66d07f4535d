use bandtree_web::{router, state::AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bandtree_web=info,tower_http=info")),
        )
        .init();

    let app_state = match AppState::new().await {
        Ok(state) => Arc::new(state),
        Err(error) => {
            tracing::error!(error = %error, "failed to initialize app state");
            std::process::exit(1);
        }
    };

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("server running on http://0.0.0.0:3000");

    axum::serve(listener, app).await.unwrap();
}
