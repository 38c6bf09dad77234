mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::contact::{MailRelay, ResendRelay};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("no .env file"),
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "kylife exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let port = config::port_from_env()?;

    // Initialize mail relay (non-fatal: contact submissions fail if config missing).
    let mail: Option<Arc<dyn MailRelay>> = match config::MailConfig::from_env() {
        Ok(cfg) => {
            tracing::info!(from = %cfg.from, to = %cfg.to, "contact relay initialized");
            Some(Arc::new(ResendRelay::new(&cfg)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact relay not configured; contact form disabled");
            None
        }
    };

    let app = routes::app(state::AppState::new(mail));
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%port, "kylife listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
