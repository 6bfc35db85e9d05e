//! Process bootstrap for the Scrawl game server.
//!
//! Everything interesting lives in the `scrawl` crate; this binary only
//! wires up logging and the listening address.

use scrawl::ScrawlServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = ScrawlServerBuilder::new()
        .bind("0.0.0.0:4000")
        .build()
        .await?;
    tracing::info!(addr = %server.local_addr()?, "sketch server listening");

    server.run().await?;
    Ok(())
}
