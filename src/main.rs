use anyhow::Result;
use learning_content::catalog::Catalog;
use learning_content::config::Config;
use learning_content::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learning_content=info".parse()?),
        )
        .init();

    info!("Starting learning content service");

    let config = Config::from_env()?;

    // Content is validated before anything is served; a bad document aborts startup
    let catalog = match &config.content_dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::embedded()?,
    };

    info!(
        "Default locale: {}, strict copy: {}",
        config.default_locale, config.strict_copy
    );

    server::serve(AppState::new(catalog, config)).await
}
