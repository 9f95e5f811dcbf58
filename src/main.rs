use campussync_api::config::ApiConfig;
use campussync_db::{create_pool, schema::initialize_database};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;

    // Tables are created if missing; existing data is left alone.
    initialize_database(&db_pool).await?;

    campussync_api::start_server(config, db_pool).await?;

    Ok(())
}
