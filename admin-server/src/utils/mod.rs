//! Utility helpers

pub mod logger;

/// Prepare the process environment: dotenv and logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init_logger();
    Ok(())
}
