//! Chat with request tracing enabled.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! RUST_LOG=openagent=debug cargo run --example tracing
//! ```

#![allow(clippy::print_stdout)]

use openagent::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let agent = Agent::from_env()?;
    let reply = agent.chat("Name three rivers.").await?;
    println!("{reply}");

    Ok(())
}
