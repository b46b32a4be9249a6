use std::error::Error;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file when one is present.
    // Deployed instances configure through real environment variables.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,qa_engine=info"))
        .unwrap();

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("starting policy QA backend");

    api::start().await?;

    Ok(())
}
