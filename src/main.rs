//! Binary entry point that wires environment bootstrap and launches the
//! hands-free healthcare assistant loop.

use anyhow::Result;

use vocalcare::assistant;

#[tokio::main]
/// Bootstraps environment variables and logging, then launches the
/// voice assistant loop.
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    assistant::run_assistant().await
}
