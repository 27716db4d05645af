use conectidade::infrastructure::memory::MemStorage;
use conectidade::infrastructure::password::PasswordService;
use conectidade::infrastructure::state::AppState;
use conectidade::presentation;

use dotenvy::dotenv;
use std::env;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    run_with_signal(port).await
}

async fn run_with_signal(port: u16) -> anyhow::Result<()> {
    run(port, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(port: u16, shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();

    // try_init: tests may initialize tracing more than once.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "conectidade=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let (listener, app) = bootstrap(port).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

async fn bootstrap(port: u16) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let state = AppState::new(
        Arc::new(MemStorage::new()),
        Arc::new(PasswordService::new()),
    );

    let app = presentation::router::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app))
}
