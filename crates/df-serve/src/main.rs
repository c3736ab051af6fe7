//! DeepfakeDetect static host

use df_serve::{router, ServeConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "df_serve=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> df_serve::ServeResult<()> {
    let config = ServeConfig::from_env()?;
    config.validate()?;

    info!("Serving {} on {}", config.dist_dir.display(), config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, router(&config)).await?;
    Ok(())
}
