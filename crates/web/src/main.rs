use anyhow::Context;

use greenwave_web::config::SiteConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    greenwave_observability::init();

    let config = SiteConfig::from_env().context("invalid configuration")?;
    let app = greenwave_web::app::build_app(&config).context("failed to build app")?;

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        assets = %config.asset_dir.display(),
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
