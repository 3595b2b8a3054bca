//! Standalone schema bootstrap, for deployments that migrate the database
//! as a separate step from serving traffic.

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL must be set to bootstrap the schema")?;

    let pool = seenfit_db::create_pool(&database_url).await?;
    seenfit_db::schema::initialize_database(&pool).await?;

    println!("Schema is up to date.");
    Ok(())
}
