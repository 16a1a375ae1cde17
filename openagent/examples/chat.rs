//! Basic chat example.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example chat
//! ```

#![allow(clippy::print_stdout)]

use openagent::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let agent = Agent::from_env()?;

    let reply = agent
        .chat_with(
            "What is the capital of France?",
            ChatOptions::new().instructions("You are a helpful assistant."),
        )
        .await?;

    println!("{reply}");

    Ok(())
}
