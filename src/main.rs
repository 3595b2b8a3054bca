use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use seenfit_api::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env().wrap_err("configuration error")?;

    // Schema bootstrap runs on every start; statements are idempotent. The
    // db-migrate binary covers deployments that migrate as a separate step.
    let db_pool = seenfit_db::create_pool(&config.database_url)
        .await
        .wrap_err("failed to connect to the database")?;
    seenfit_db::schema::initialize_database(&db_pool).await?;

    seenfit_api::start_server(config, db_pool).await
}
