use std::env;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use policy_assistant::core::config::AppPaths;
use policy_assistant::core::logging;
use policy_assistant::server;
use policy_assistant::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(&AppPaths::new(), "server.log");

    let state = AppState::initialize().await?;
    tracing::info!(
        "Loaded {} policy chunks from {}",
        state.assistant.store().len(),
        state.paths.resolve(&state.settings.corpus.path).display()
    );

    let port = env::var("PORT")
        .ok()
        .and_then(|val| val.parse::<u16>().ok())
        .unwrap_or(0);
    let bind_addr = format!("127.0.0.1:{}", port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    println!("POLICY_ASSISTANT_PORT={}", addr.port());
    tracing::info!("Listening on {}", addr);

    let app: Router = server::router::router(state);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
