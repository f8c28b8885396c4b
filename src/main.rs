use tracing::Level;
use tracing_subscriber::EnvFilter;

use auth_stub_api::{config::Config, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cfg = Config::default();
    let app = router();

    tracing::info!("auth_stub_api listening on {}", cfg.addr);

    axum::Server::bind(&cfg.addr).serve(app.into_make_service()).await?;
    Ok(())
}
